// src/constants/mksa.rs

//! Physical constants and unit conversions in the MKSA (SI) system.

/// m / s
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;
/// m^3 / kg s^2
pub const GRAVITATIONAL_CONSTANT: f64 = 6.673e-11;
/// kg m^2 / s
pub const PLANCKS_CONSTANT_H: f64 = 6.62606876e-34;
/// kg m^2 / s
pub const PLANCKS_CONSTANT_HBAR: f64 = 1.05457159642e-34;
/// m
pub const ASTRONOMICAL_UNIT: f64 = 1.49597870691e11;
/// m
pub const LIGHT_YEAR: f64 = 9.46053620707e15;
/// m
pub const PARSEC: f64 = 3.08567758135e16;
/// m / s^2
pub const GRAV_ACCEL: f64 = 9.80665e0;
/// kg m^2 / s^2
pub const ELECTRON_VOLT: f64 = 1.602176462e-19;
/// kg
pub const MASS_ELECTRON: f64 = 9.10938188e-31;
/// kg
pub const MASS_MUON: f64 = 1.88353109e-28;
/// kg
pub const MASS_PROTON: f64 = 1.67262158e-27;
/// kg
pub const MASS_NEUTRON: f64 = 1.67492716e-27;
/// kg m^2 / s^2
pub const RYDBERG: f64 = 2.17987190389e-18;
/// kg m^2 / K s^2
pub const BOLTZMANN: f64 = 1.3806503e-23;
/// A m^2
pub const BOHR_MAGNETON: f64 = 9.27400899e-24;
/// A m^2
pub const NUCLEAR_MAGNETON: f64 = 5.05078317e-27;
/// A m^2
pub const ELECTRON_MAGNETIC_MOMENT: f64 = 9.28476362e-24;
/// A m^2
pub const PROTON_MAGNETIC_MOMENT: f64 = 1.410606633e-26;
/// kg m^2 / K mol s^2
pub const MOLAR_GAS: f64 = 8.314472e0;
/// m^3 / mol
pub const STANDARD_GAS_VOLUME: f64 = 2.2710981e-2;
/// s
pub const MINUTE: f64 = 6e1;
/// s
pub const HOUR: f64 = 3.6e3;
/// s
pub const DAY: f64 = 8.64e4;
/// s
pub const WEEK: f64 = 6.048e5;
/// m
pub const INCH: f64 = 2.54e-2;
/// m
pub const FOOT: f64 = 3.048e-1;
/// m
pub const YARD: f64 = 9.144e-1;
/// m
pub const MILE: f64 = 1.609344e3;
/// m
pub const NAUTICAL_MILE: f64 = 1.852e3;
/// m
pub const FATHOM: f64 = 1.8288e0;
/// m
pub const MIL: f64 = 2.54e-5;
/// m
pub const POINT: f64 = 3.52777777778e-4;
/// m
pub const TEXPOINT: f64 = 3.51459803515e-4;
/// m
pub const MICRON: f64 = 1e-6;
/// m
pub const ANGSTROM: f64 = 1e-10;
/// m^2
pub const HECTARE: f64 = 1e4;
/// m^2
pub const ACRE: f64 = 4.04685642241e3;
/// m^2
pub const BARN: f64 = 1e-28;
/// m^3
pub const LITER: f64 = 1e-3;
/// m^3
pub const US_GALLON: f64 = 3.78541178402e-3;
/// m^3
pub const QUART: f64 = 9.46352946004e-4;
/// m^3
pub const PINT: f64 = 4.73176473002e-4;
/// m^3
pub const CUP: f64 = 2.36588236501e-4;
/// m^3
pub const FLUID_OUNCE: f64 = 2.95735295626e-5;
/// m^3
pub const TABLESPOON: f64 = 1.47867647813e-5;
/// m^3
pub const TEASPOON: f64 = 4.92892159375e-6;
/// m^3
pub const CANADIAN_GALLON: f64 = 4.54609e-3;
/// m^3
pub const UK_GALLON: f64 = 4.546092e-3;
/// m / s
pub const MILES_PER_HOUR: f64 = 4.4704e-1;
/// m / s
pub const KILOMETERS_PER_HOUR: f64 = 2.77777777778e-1;
/// m / s
pub const KNOT: f64 = 5.14444444444e-1;
/// kg
pub const POUND_MASS: f64 = 4.5359237e-1;
/// kg
pub const OUNCE_MASS: f64 = 2.8349523125e-2;
/// kg
pub const TON: f64 = 9.0718474e2;
/// kg
pub const METRIC_TON: f64 = 1e3;
/// kg
pub const UK_TON: f64 = 1.0160469088e3;
/// kg
pub const TROY_OUNCE: f64 = 3.1103475e-2;
/// kg
pub const CARAT: f64 = 2e-4;
/// kg
pub const UNIFIED_ATOMIC_MASS: f64 = 1.66053873e-27;
/// kg m / s^2
pub const GRAM_FORCE: f64 = 9.80665e-3;
/// kg m / s^2
pub const POUND_FORCE: f64 = 4.44822161526e0;
/// kg m / s^2
pub const KILOPOUND_FORCE: f64 = 4.44822161526e3;
/// kg m / s^2
pub const POUNDAL: f64 = 1.38255e-1;
/// kg m^2 / s^2
pub const CALORIE: f64 = 4.1868e0;
/// kg m^2 / s^2
pub const BTU: f64 = 1.05505585262e3;
/// kg m^2 / s^2
pub const THERM: f64 = 1.05506e8;
/// kg m^2 / s^3
pub const HORSEPOWER: f64 = 7.457e2;
/// kg / m s^2
pub const BAR: f64 = 1e5;
/// kg / m s^2
pub const STD_ATMOSPHERE: f64 = 1.01325e5;
/// kg / m s^2
pub const TORR: f64 = 1.33322368421e2;
/// kg / m s^2
pub const METER_OF_MERCURY: f64 = 1.33322368421e5;
/// kg / m s^2
pub const INCH_OF_MERCURY: f64 = 3.38638815789e3;
/// kg / m s^2
pub const INCH_OF_WATER: f64 = 2.490889e2;
/// kg / m s^2
pub const PSI: f64 = 6.89475729317e3;
/// kg m^-1 s^-1
pub const POISE: f64 = 1e-1;
/// m^2 / s
pub const STOKES: f64 = 1e-4;
/// A s / mol
pub const FARADAY: f64 = 9.6485341472e4;
/// A s
pub const ELECTRON_CHARGE: f64 = 1.602176462e-19;
/// kg / A s^2
pub const GAUSS: f64 = 1e-4;
/// cd / m^2
pub const STILB: f64 = 1e4;
/// cd sr
pub const LUMEN: f64 = 1e0;
/// cd sr / m^2
pub const LUX: f64 = 1e0;
/// cd sr / m^2
pub const PHOT: f64 = 1e4;
/// cd sr / m^2
pub const FOOTCANDLE: f64 = 1.076e1;
/// cd sr / m^2
pub const LAMBERT: f64 = 1e4;
/// cd sr / m^2
pub const FOOTLAMBERT: f64 = 1.07639104e1;
/// 1 / s
pub const CURIE: f64 = 3.7e10;
/// A s / kg
pub const ROENTGEN: f64 = 2.58e-4;
/// m^2 / s^2
pub const RAD: f64 = 1e-2;
/// kg
pub const SOLAR_MASS: f64 = 1.98892e30;
/// m
pub const BOHR_RADIUS: f64 = 5.291772083e-11;
/// kg m / s^2
pub const NEWTON: f64 = 1e0;
/// kg m / s^2
pub const DYNE: f64 = 1e-5;
/// kg m^2 / s^2
pub const JOULE: f64 = 1e0;
/// kg m^2 / s^2
pub const ERG: f64 = 1e-7;
/// kg / K^4 s^3
pub const STEFAN_BOLTZMANN_CONSTANT: f64 = 5.67039934436e-8;
/// m^2
pub const THOMSON_CROSS_SECTION: f64 = 6.65245853542e-29;
/// A^2 s^4 / kg m^3
pub const VACUUM_PERMITTIVITY: f64 = 8.854187817e-12;
/// kg m / A^2 s^2
pub const VACUUM_PERMEABILITY: f64 = 1.25663706144e-6;
/// A s^2 / m^2
pub const DEBYE: f64 = 3.33564095198e-30;
