/// Hours in a (non-leap) year.
pub const HOURS_PER_YEAR: f64 = 8760.0;
/// Kilowatt-hours in one megawatt-hour.
pub const KWH_PER_MWH: f64 = 1000.0;
/// BTU in one mmBTU.
pub const BTU_PER_MMBTU: f64 = 1.0e6;
/// Kilowatt-hours of heat in one mmBTU.
pub const KWH_PER_MMBTU: f64 = 293.07107;
/// Kilowatts per watt.
pub const KW_PER_W: f64 = 1.0e-3;
/// BTU required to produce 1 kWh at 100% thermal efficiency.
///
/// Any heat rate at or below this value is physically impossible.
pub const BTU_PER_KWH_PERFECT: f64 = 3412.14148;
