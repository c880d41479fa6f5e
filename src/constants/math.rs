// src/constants/math.rs

//! Mathematical constants.

/// e
pub const E: f64 = std::f64::consts::E;
/// log_2 (e)
pub const LOG2E: f64 = std::f64::consts::LOG2_E;
/// log_10 (e)
pub const LOG10E: f64 = std::f64::consts::LOG10_E;
/// sqrt(2)
pub const SQRT2: f64 = std::f64::consts::SQRT_2;
/// sqrt(1/2)
pub const SQRT1_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
/// sqrt(3)
pub const SQRT3: f64 = 1.732_050_807_568_877_2;
/// pi
pub const PI: f64 = std::f64::consts::PI;
/// 2 pi
pub const TAU: f64 = std::f64::consts::TAU;
/// pi / 2
pub const PI_2: f64 = std::f64::consts::FRAC_PI_2;
/// pi / 4
pub const PI_4: f64 = std::f64::consts::FRAC_PI_4;
/// sqrt(pi)
pub const SQRTPI: f64 = 1.772_453_850_905_516;
/// 2 / sqrt(pi)
pub const TWO_DIV_SQRTPI: f64 = std::f64::consts::FRAC_2_SQRT_PI;
/// 1 / pi
pub const ONE_DIV_PI: f64 = std::f64::consts::FRAC_1_PI;
/// 2 / pi
pub const TWO_DIV_PI: f64 = std::f64::consts::FRAC_2_PI;
/// ln(10)
pub const LN10: f64 = std::f64::consts::LN_10;
/// ln(2)
pub const LN2: f64 = std::f64::consts::LN_2;
/// ln(pi)
pub const LNPI: f64 = 1.144_729_885_849_400_2;
/// Euler-Mascheroni constant
pub const EULER: f64 = 0.577_215_664_901_532_9;
