//! Black-Scholes-Merton closed-form pricer for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! [`DerivedQuantities::compute`] is the single derivation path for these
//! terms; the model, the Greeks, the theta decay curve and the scenario grids
//! all go through it.

use super::distributions::norm_cdf;
use super::error::DomainError;

/// The five Black-Scholes-Merton inputs.
///
/// # Examples
/// ```
/// use pricer_models::analytical::ModelParameters;
///
/// let params = ModelParameters::new(62.0, 60.0, 0.32, 0.04, 40.0 / 365.0);
/// assert!(params.validate().is_ok());
/// assert!(params.with_volatility(0.0).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelParameters {
    /// Underlying price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
    /// Annualised risk-free rate (r); may be negative
    pub rate: f64,
    /// Time to expiry in years (t)
    pub expiry: f64,
}

impl ModelParameters {
    /// Creates a parameter set without validating it.
    #[inline]
    pub fn new(spot: f64, strike: f64, volatility: f64, rate: f64, expiry: f64) -> Self {
        Self {
            spot,
            strike,
            volatility,
            rate,
            expiry,
        }
    }

    /// Returns a copy with a different spot.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Returns a copy with a different time to expiry.
    #[inline]
    pub fn with_expiry(self, expiry: f64) -> Self {
        Self { expiry, ..self }
    }

    /// Checks the parameters against the model domain.
    ///
    /// # Errors
    /// - `DomainError::NonFinite` if any input is NaN or infinite
    /// - `DomainError::InvalidSpot` if S <= 0
    /// - `DomainError::InvalidStrike` if K <= 0
    /// - `DomainError::InvalidVolatility` if σ <= 0
    /// - `DomainError::InvalidExpiry` if t <= 0
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("volatility", self.volatility),
            ("rate", self.rate),
            ("expiry", self.expiry),
        ];
        if let Some(&(name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(DomainError::NonFinite { name, value });
        }

        if self.spot <= 0.0 {
            return Err(DomainError::InvalidSpot { spot: self.spot });
        }
        if self.strike <= 0.0 {
            return Err(DomainError::InvalidStrike {
                strike: self.strike,
            });
        }
        if self.volatility <= 0.0 {
            return Err(DomainError::InvalidVolatility {
                volatility: self.volatility,
            });
        }
        if self.expiry <= 0.0 {
            return Err(DomainError::InvalidExpiry {
                expiry: self.expiry,
            });
        }
        Ok(())
    }
}

/// Intermediate quantities shared by every closed-form output.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedQuantities {
    /// d₁
    pub d1: f64,
    /// d₂ = d₁ - σ√t
    pub d2: f64,
    /// √t
    pub sqrt_t: f64,
    /// σ√t
    pub vol_sqrt_t: f64,
    /// e^(-rt)
    pub discount: f64,
    /// Call fair value
    pub call_price: f64,
    /// Put fair value
    pub put_price: f64,
}

impl DerivedQuantities {
    /// Validates `params` and derives d₁, d₂ and both fair values.
    ///
    /// # Errors
    /// Any `DomainError` from [`ModelParameters::validate`], or
    /// `DomainError::DegenerateDiffusion` when σ·√t underflows to zero.
    pub fn compute(params: &ModelParameters) -> Result<Self, DomainError> {
        params.validate()?;

        let ModelParameters {
            spot: s,
            strike: k,
            volatility: sigma,
            rate: r,
            expiry: t,
        } = *params;

        let sqrt_t = t.sqrt();
        let vol_sqrt_t = sigma * sqrt_t;
        if vol_sqrt_t <= 0.0 {
            return Err(DomainError::DegenerateDiffusion { vol_sqrt_t });
        }

        let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;
        let discount = (-r * t).exp();

        let call_price = s * norm_cdf(d1) - k * discount * norm_cdf(d2);
        let put_price = k * discount * norm_cdf(-d2) - s * norm_cdf(-d1);

        Ok(Self {
            d1,
            d2,
            sqrt_t,
            vol_sqrt_t,
            discount,
            call_price,
            put_price,
        })
    }
}

/// Black-Scholes-Merton model bound to one parameter set.
///
/// Construction derives and caches d₁, d₂ and both fair values; every query
/// afterwards is a pure read. Instances are immutable and `Send + Sync`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholesModel;
///
/// let model = BlackScholesModel::new(100.0, 100.0, 0.2, 0.05, 1.0).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = model.put_call_parity() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlackScholesModel {
    params: ModelParameters,
    derived: DerivedQuantities,
}

impl BlackScholesModel {
    /// Creates a model from the five scalar inputs.
    ///
    /// # Arguments
    /// * `spot` - Underlying price S (> 0)
    /// * `strike` - Strike K (> 0)
    /// * `volatility` - σ (> 0)
    /// * `rate` - Risk-free rate r (any finite value)
    /// * `expiry` - Time to expiry t in years (> 0)
    ///
    /// # Errors
    /// `DomainError` when the inputs are outside the model domain.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholesModel;
    ///
    /// assert!(BlackScholesModel::new(100.0, 100.0, 0.2, -0.01, 0.5).is_ok());
    /// assert!(BlackScholesModel::new(-1.0, 100.0, 0.2, 0.05, 0.5).is_err());
    /// assert!(BlackScholesModel::new(100.0, 100.0, 0.0, 0.05, 0.5).is_err());
    /// ```
    pub fn new(
        spot: f64,
        strike: f64,
        volatility: f64,
        rate: f64,
        expiry: f64,
    ) -> Result<Self, DomainError> {
        Self::from_params(ModelParameters::new(spot, strike, volatility, rate, expiry))
    }

    /// Creates a model from a parameter set.
    pub fn from_params(params: ModelParameters) -> Result<Self, DomainError> {
        let derived = DerivedQuantities::compute(&params)?;
        tracing::trace!(
            spot = params.spot,
            strike = params.strike,
            volatility = params.volatility,
            rate = params.rate,
            expiry = params.expiry,
            d1 = derived.d1,
            d2 = derived.d2,
            "constructed Black-Scholes model"
        );
        Ok(Self { params, derived })
    }

    /// Returns the model inputs.
    #[inline]
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Returns the cached derived quantities.
    #[inline]
    pub fn derived(&self) -> &DerivedQuantities {
        &self.derived
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.params.spot
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.params.strike
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.params.volatility
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.params.rate
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.params.expiry
    }

    /// d₁ term.
    #[inline]
    pub fn d1(&self) -> f64 {
        self.derived.d1
    }

    /// d₂ term.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.derived.d2
    }

    /// Call fair value C.
    #[inline]
    pub fn call_price(&self) -> f64 {
        self.derived.call_price
    }

    /// Put fair value P.
    #[inline]
    pub fn put_price(&self) -> f64 {
        self.derived.put_price
    }

    /// Underlying level at expiry above which a bought call profits: K + C.
    #[inline]
    pub fn breakeven_call(&self) -> f64 {
        self.params.strike + self.derived.call_price
    }

    /// Underlying level at expiry below which a bought put profits: K - P.
    #[inline]
    pub fn breakeven_put(&self) -> f64 {
        self.params.strike - self.derived.put_price
    }

    /// C - P. Equals S - K·e^(-rt) up to rounding.
    #[inline]
    pub fn put_call_parity(&self) -> f64 {
        self.derived.call_price - self.derived.put_price
    }

    /// Call intrinsic value max(S - K, 0).
    ///
    /// Only the call side is exposed; sensitivity displays rely on this
    /// definition.
    #[inline]
    pub fn intrinsic_value(&self) -> f64 {
        (self.params.spot - self.params.strike).max(0.0)
    }

    /// Call time value C - max(S - K, 0).
    #[inline]
    pub fn time_value(&self) -> f64 {
        self.derived.call_price - self.intrinsic_value()
    }
}
