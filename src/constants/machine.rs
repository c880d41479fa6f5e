// src/constants/machine.rs

//! Floating-point machine limits and their common roots and logarithms.

pub const DBL_EPSILON: f64 = 2.2204460492503131e-16;
pub const SQRT_DBL_EPSILON: f64 = 1.4901161193847656e-08;
pub const ROOT3_DBL_EPSILON: f64 = 6.0554544523933429e-06;
pub const ROOT4_DBL_EPSILON: f64 = 1.2207031250000000e-04;
pub const ROOT5_DBL_EPSILON: f64 = 7.4009597974140505e-04;
pub const ROOT6_DBL_EPSILON: f64 = 2.4607833005759251e-03;
pub const LOG_DBL_EPSILON: f64 = -3.6043653389117154e+01;

pub const DBL_MIN: f64 = 2.2250738585072014e-308;
pub const SQRT_DBL_MIN: f64 = 1.4916681462400413e-154;
pub const ROOT3_DBL_MIN: f64 = 2.8126442852362996e-103;
pub const ROOT4_DBL_MIN: f64 = 1.2213386697554620e-77;
pub const ROOT5_DBL_MIN: f64 = 2.9476022969691763e-62;
pub const ROOT6_DBL_MIN: f64 = 5.3034368905798218e-52;
pub const LOG_DBL_MIN: f64 = -7.0839641853226408e+02;

pub const DBL_MAX: f64 = 1.7976931348623157e+308;
pub const SQRT_DBL_MAX: f64 = 1.3407807929942596e+154;
pub const ROOT3_DBL_MAX: f64 = 5.6438030941222897e+102;
pub const ROOT4_DBL_MAX: f64 = 1.1579208923731620e+77;
pub const ROOT5_DBL_MAX: f64 = 4.4765466227572707e+61;
pub const ROOT6_DBL_MAX: f64 = 2.3756689782295612e+51;
pub const LOG_DBL_MAX: f64 = 7.0978271289338397e+02;

pub const FLT_EPSILON: f64 = 1.1920928955078125e-07;
pub const SQRT_FLT_EPSILON: f64 = 3.4526698300124393e-04;
pub const ROOT3_FLT_EPSILON: f64 = 4.9215666011518501e-03;
pub const ROOT4_FLT_EPSILON: f64 = 1.8581361171917516e-02;
pub const ROOT5_FLT_EPSILON: f64 = 4.1234622211652937e-02;
pub const ROOT6_FLT_EPSILON: f64 = 7.0153878019335827e-02;
pub const LOG_FLT_EPSILON: f64 = -1.5942385152878742e+01;

pub const FLT_MIN: f64 = 1.1754943508222875e-38;
pub const SQRT_FLT_MIN: f64 = 1.0842021724855044e-19;
pub const ROOT3_FLT_MIN: f64 = 2.2737367544323241e-13;
pub const ROOT4_FLT_MIN: f64 = 3.2927225399135965e-10;
pub const ROOT5_FLT_MIN: f64 = 2.5944428542140822e-08;
pub const ROOT6_FLT_MIN: f64 = 4.7683715820312542e-07;
pub const LOG_FLT_MIN: f64 = -8.7336544750553102e+01;

pub const FLT_MAX: f64 = 3.4028234663852886e+38;
pub const SQRT_FLT_MAX: f64 = 1.8446743523953730e+19;
pub const ROOT3_FLT_MAX: f64 = 6.9814635196223242e+12;
pub const ROOT4_FLT_MAX: f64 = 4.2949672319999986e+09;
pub const ROOT5_FLT_MAX: f64 = 5.0859007855960041e+07;
pub const ROOT6_FLT_MAX: f64 = 2.6422459233807749e+06;
pub const LOG_FLT_MAX: f64 = 8.8722839052068352e+01;

pub const SFLT_EPSILON: f64 = 4.8828125000000000e-04;
pub const SQRT_SFLT_EPSILON: f64 = 2.2097086912079612e-02;
pub const ROOT3_SFLT_EPSILON: f64 = 7.8745065618429588e-02;
pub const ROOT4_SFLT_EPSILON: f64 = 1.4865088937534013e-01;
pub const ROOT5_SFLT_EPSILON: f64 = 2.1763764082403100e-01;
pub const ROOT6_SFLT_EPSILON: f64 = 2.8061551207734325e-01;
pub const LOG_SFLT_EPSILON: f64 = -7.6246189861593985e+00;

/// Working precision, kept as an alias of [`DBL_EPSILON`].
pub const MACH_EPS: f64 = DBL_EPSILON;

// Coarse rounded precisions for iteration stopping criteria.
pub const SQRT_MACH_EPS: f64 = 3.2e-08;
pub const ROOT3_MACH_EPS: f64 = 1.0e-05;
pub const ROOT4_MACH_EPS: f64 = 0.000178;
pub const ROOT5_MACH_EPS: f64 = 0.00100;
pub const ROOT6_MACH_EPS: f64 = 0.00316;
pub const LOG_MACH_EPS: f64 = -34.54;
