//! Analytical Greeks for the Black-Scholes-Merton model.
//!
//! | Greek | Call | Put |
//! |-------|------|-----|
//! | Delta | N(d₁) | N(d₁) - 1 |
//! | Gamma | φ(d₁)/(S·σ·√T) | same |
//! | Vega  | S·√T·φ(d₁) | same |
//! | Theta | -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂) | -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂) |
//! | Rho   | K·T·e^(-rT)·N(d₂) | -K·T·e^(-rT)·N(-d₂) |
//!
//! Vega and Rho are per unit change of σ and r (multiply by 0.01 for the
//! "per 1%" convention). Theta is per year; the daily variant divides by 365.

use std::fmt;
use std::str::FromStr;

use super::black_scholes::{BlackScholesModel, DerivedQuantities, ModelParameters};
use super::distributions::{norm_cdf, norm_pdf};

/// Calendar days used to convert annual theta to theta per day.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// First-order and gamma sensitivities for both option sides.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂C/∂S
    pub delta_call: f64,
    /// ∂P/∂S
    pub delta_put: f64,
    /// ∂²V/∂S², shared by call and put
    pub gamma: f64,
    /// ∂V/∂σ per unit σ, shared by call and put
    pub vega: f64,
    /// ∂C/∂r per unit r
    pub rho_call: f64,
    /// ∂P/∂r per unit r
    pub rho_put: f64,
}

/// Time decay for both option sides.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thetas {
    /// Call theta per year
    pub call: f64,
    /// Put theta per year
    pub put: f64,
    /// Call theta per calendar day (`call / 365`)
    pub call_daily: f64,
    /// Put theta per calendar day (`put / 365`)
    pub put_daily: f64,
}

/// Subset selector for [`BlackScholesModel::sensitivity_analysis`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SensitivitySelector {
    /// Call and put delta
    Delta,
    /// Gamma
    Gamma,
    /// Vega
    Vega,
    /// Call and put rho
    Rho,
}

impl SensitivitySelector {
    /// Parses a discriminator code.
    ///
    /// Accepts the single-letter codes `d`, `g`, `v`, `r` and the full names,
    /// case-insensitively. Returns `None` for anything else.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::SensitivitySelector;
    ///
    /// assert_eq!(SensitivitySelector::parse("d"), Some(SensitivitySelector::Delta));
    /// assert_eq!(SensitivitySelector::parse("Vega"), Some(SensitivitySelector::Vega));
    /// assert_eq!(SensitivitySelector::parse("x"), None);
    /// ```
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "d" | "delta" => Some(Self::Delta),
            "g" | "gamma" => Some(Self::Gamma),
            "v" | "vega" => Some(Self::Vega),
            "r" | "rho" => Some(Self::Rho),
            _ => None,
        }
    }

    /// Single-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Delta => "d",
            Self::Gamma => "g",
            Self::Vega => "v",
            Self::Rho => "r",
        }
    }
}

impl FromStr for SensitivitySelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown sensitivity selector: {}", s))
    }
}

impl fmt::Display for SensitivitySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Delta => "delta",
            Self::Gamma => "gamma",
            Self::Vega => "vega",
            Self::Rho => "rho",
        };
        write!(f, "{}", name)
    }
}

/// Result of [`BlackScholesModel::sensitivity_analysis`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum SensitivityReport {
    /// Call and put delta
    Delta {
        /// Call delta
        call: f64,
        /// Put delta
        put: f64,
    },
    /// Gamma
    Gamma {
        /// Gamma value
        value: f64,
    },
    /// Vega
    Vega {
        /// Vega value
        value: f64,
    },
    /// Call and put rho
    Rho {
        /// Call rho
        call: f64,
        /// Put rho
        put: f64,
    },
    /// Every sensitivity
    All(Greeks),
}

/// Greeks from an already derived parameter set.
pub(crate) fn greeks_from(params: &ModelParameters, derived: &DerivedQuantities) -> Greeks {
    let nd1 = norm_cdf(derived.d1);
    let pdf_d1 = norm_pdf(derived.d1);
    let k_t_disc = params.strike * params.expiry * derived.discount;

    Greeks {
        delta_call: nd1,
        delta_put: nd1 - 1.0,
        gamma: pdf_d1 / (params.spot * derived.vol_sqrt_t),
        vega: params.spot * derived.sqrt_t * pdf_d1,
        rho_call: k_t_disc * norm_cdf(derived.d2),
        rho_put: -k_t_disc * norm_cdf(-derived.d2),
    }
}

/// Thetas from an already derived parameter set.
pub(crate) fn thetas_from(params: &ModelParameters, derived: &DerivedQuantities) -> Thetas {
    let decay = -(params.spot * params.volatility * norm_pdf(derived.d1)) / (2.0 * derived.sqrt_t);
    let carry = params.rate * params.strike * derived.discount;

    let call = decay - carry * norm_cdf(derived.d2);
    let put = decay + carry * norm_cdf(-derived.d2);

    Thetas {
        call,
        put,
        call_daily: call / DAYS_PER_YEAR,
        put_daily: put / DAYS_PER_YEAR,
    }
}

impl BlackScholesModel {
    /// All delta, gamma, vega and rho values.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholesModel;
    ///
    /// let model = BlackScholesModel::new(100.0, 100.0, 0.2, 0.05, 1.0).unwrap();
    /// let g = model.greeks();
    /// assert!((g.delta_call - g.delta_put - 1.0).abs() < 1e-12);
    /// ```
    pub fn greeks(&self) -> Greeks {
        greeks_from(self.params(), self.derived())
    }

    /// Call delta N(d₁).
    #[inline]
    pub fn delta_call(&self) -> f64 {
        norm_cdf(self.d1())
    }

    /// Put delta N(d₁) - 1.
    #[inline]
    pub fn delta_put(&self) -> f64 {
        norm_cdf(self.d1()) - 1.0
    }

    /// Gamma, shared by call and put.
    #[inline]
    pub fn gamma(&self) -> f64 {
        norm_pdf(self.d1()) / (self.spot() * self.derived().vol_sqrt_t)
    }

    /// Vega per unit volatility.
    #[inline]
    pub fn vega(&self) -> f64 {
        self.spot() * self.derived().sqrt_t * norm_pdf(self.d1())
    }

    /// Annual and daily theta for both sides.
    pub fn thetas(&self) -> Thetas {
        thetas_from(self.params(), self.derived())
    }

    /// Selected subset of the sensitivities.
    ///
    /// `None` returns every value.
    pub fn sensitivity_analysis(&self, selector: Option<SensitivitySelector>) -> SensitivityReport {
        let g = self.greeks();
        match selector {
            None => SensitivityReport::All(g),
            Some(SensitivitySelector::Delta) => SensitivityReport::Delta {
                call: g.delta_call,
                put: g.delta_put,
            },
            Some(SensitivitySelector::Gamma) => SensitivityReport::Gamma { value: g.gamma },
            Some(SensitivitySelector::Vega) => SensitivityReport::Vega { value: g.vega },
            Some(SensitivitySelector::Rho) => SensitivityReport::Rho {
                call: g.rho_call,
                put: g.rho_put,
            },
        }
    }

    /// Same as [`sensitivity_analysis`](Self::sensitivity_analysis) but takes
    /// the raw discriminator code.
    ///
    /// An unrecognised code returns the full set rather than an error.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::{BlackScholesModel, SensitivityReport};
    ///
    /// let model = BlackScholesModel::new(100.0, 100.0, 0.2, 0.05, 1.0).unwrap();
    /// assert!(matches!(model.sensitivity_analysis_by_code(Some("g")), SensitivityReport::Gamma { .. }));
    /// assert!(matches!(model.sensitivity_analysis_by_code(Some("?")), SensitivityReport::All(_)));
    /// ```
    pub fn sensitivity_analysis_by_code(&self, code: Option<&str>) -> SensitivityReport {
        let selector = code.and_then(SensitivitySelector::parse);
        if selector.is_none() && code.is_some() {
            tracing::debug!(code = ?code, "unrecognised sensitivity selector, returning all");
        }
        self.sensitivity_analysis(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn reference_model() -> BlackScholesModel {
        BlackScholesModel::new(62.0, 60.0, 0.32, 0.04, 40.0 / 365.0).unwrap()
    }

    #[test]
    fn test_reference_greeks() {
        let g = reference_model().greeks();
        assert_abs_diff_eq!(g.delta_call, 0.6568491697390297, epsilon = 1e-10);
        assert_abs_diff_eq!(g.delta_put, -0.34315083026097026, epsilon = 1e-10);
        assert_abs_diff_eq!(g.gamma, 0.055984028735716895, epsilon = 1e-10);
        assert_abs_diff_eq!(g.vega, 7.546831130655412, epsilon = 1e-9);
        assert_abs_diff_eq!(g.rho_call, 4.040076646426906, epsilon = 1e-9);
        assert_abs_diff_eq!(g.rho_put, -2.5065054827067357, epsilon = 1e-9);
    }

    #[test]
    fn test_reference_thetas() {
        let th = reference_model().thetas();
        assert_abs_diff_eq!(th.call, -12.493001426702723, epsilon = 1e-8);
        assert_abs_diff_eq!(th.put, -10.103498949568944, epsilon = 1e-8);
        assert_eq!(th.call_daily, th.call / 365.0);
        assert_eq!(th.put_daily, th.put / 365.0);
    }

    #[test]
    fn test_scalar_accessors_match_struct() {
        let model = reference_model();
        let g = model.greeks();
        assert_eq!(model.delta_call(), g.delta_call);
        assert_eq!(model.delta_put(), g.delta_put);
        assert_relative_eq!(model.gamma(), g.gamma, max_relative = 1e-14);
        assert_relative_eq!(model.vega(), g.vega, max_relative = 1e-14);
    }

    #[test]
    fn test_gamma_matches_delta_central_difference() {
        let model = reference_model();
        let h = 1e-3 * model.spot();
        let params = *model.params();
        let up = BlackScholesModel::from_params(params.with_spot(params.spot + h)).unwrap();
        let down = BlackScholesModel::from_params(params.with_spot(params.spot - h)).unwrap();

        let fd_call = (up.delta_call() - down.delta_call()) / (2.0 * h);
        let fd_put = (up.delta_put() - down.delta_put()) / (2.0 * h);
        assert_relative_eq!(fd_call, model.gamma(), max_relative = 1e-4);
        assert_relative_eq!(fd_put, model.gamma(), max_relative = 1e-4);
    }

    #[test]
    fn test_vega_matches_price_central_difference() {
        let model = reference_model();
        let h = 1e-5;
        let params = *model.params();
        let up = BlackScholesModel::from_params(params.with_volatility(params.volatility + h)).unwrap();
        let down =
            BlackScholesModel::from_params(params.with_volatility(params.volatility - h)).unwrap();
        let fd = (up.call_price() - down.call_price()) / (2.0 * h);
        assert_relative_eq!(fd, model.vega(), max_relative = 1e-6);
    }

    #[test]
    fn test_theta_matches_expiry_central_difference() {
        // θ = -∂V/∂t with t = time to expiry
        let model = reference_model();
        let h = 1e-6;
        let params = *model.params();
        let up = BlackScholesModel::from_params(params.with_expiry(params.expiry + h)).unwrap();
        let down = BlackScholesModel::from_params(params.with_expiry(params.expiry - h)).unwrap();
        let fd_call = -(up.call_price() - down.call_price()) / (2.0 * h);
        let fd_put = -(up.put_price() - down.put_price()) / (2.0 * h);
        let th = model.thetas();
        assert_relative_eq!(fd_call, th.call, max_relative = 1e-5);
        assert_relative_eq!(fd_put, th.put, max_relative = 1e-5);
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!(SensitivitySelector::parse("d"), Some(SensitivitySelector::Delta));
        assert_eq!(SensitivitySelector::parse("G"), Some(SensitivitySelector::Gamma));
        assert_eq!(SensitivitySelector::parse("vega"), Some(SensitivitySelector::Vega));
        assert_eq!(SensitivitySelector::parse(" r "), Some(SensitivitySelector::Rho));
        assert_eq!(SensitivitySelector::parse("theta"), None);
        assert!("q".parse::<SensitivitySelector>().is_err());
        assert_eq!(SensitivitySelector::Rho.code(), "r");
        assert_eq!(SensitivitySelector::Gamma.to_string(), "gamma");
    }

    #[test]
    fn test_sensitivity_analysis_subsets() {
        let model = reference_model();
        let g = model.greeks();

        assert_eq!(
            model.sensitivity_analysis(Some(SensitivitySelector::Delta)),
            SensitivityReport::Delta {
                call: g.delta_call,
                put: g.delta_put
            }
        );
        assert_eq!(
            model.sensitivity_analysis(Some(SensitivitySelector::Gamma)),
            SensitivityReport::Gamma { value: g.gamma }
        );
        assert_eq!(
            model.sensitivity_analysis(Some(SensitivitySelector::Vega)),
            SensitivityReport::Vega { value: g.vega }
        );
        assert_eq!(
            model.sensitivity_analysis(Some(SensitivitySelector::Rho)),
            SensitivityReport::Rho {
                call: g.rho_call,
                put: g.rho_put
            }
        );
        assert_eq!(model.sensitivity_analysis(None), SensitivityReport::All(g));
    }

    #[test]
    fn test_unknown_code_falls_back_to_all() {
        let model = reference_model();
        let all = SensitivityReport::All(model.greeks());
        assert_eq!(model.sensitivity_analysis_by_code(Some("theta")), all);
        assert_eq!(model.sensitivity_analysis_by_code(Some("")), all);
        assert_eq!(model.sensitivity_analysis_by_code(None), all);
    }
}
