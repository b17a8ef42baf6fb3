use super::Placement;
use crate::catalog::View;

pub fn of(view: View) -> &'static [Placement] {
    match view {
        View::Station => STATION,
        View::EnergyTodayTotals => ENERGY_TODAY_TOTALS,
        View::GridOutput => GRID_OUTPUT,
        View::InverterInfo => INVERTER_INFO,
        View::LoadInfo => LOAD_INFO,
        View::BatteryOutput => BATTERY_OUTPUT,
        View::PvOutput => PV_OUTPUT,
        View::Telemetry => &[],
    }
}

/// Clock fields are consumed by the timestamp and month/year counters are not published.
pub const STATION: &[Placement] = &[
    Placement::root("batterySOC", "batterySOC"),
    Placement::root("batteryPower", "batteryPower"),
    Placement::root("currentConsumptionPower", "currentConsumptionPower"),
    Placement::root("Bat Charge Day Energy", "batteryChargeDayEnergy"),
    Placement::root("Bat Discharge Day Energy", "batteryDischargeDayEnergy"),
    Placement::root("Bat Charge Total Energy", "batteryChargeTotalEnergy"),
    Placement::root("Bat Discharge Total Energy", "batteryDischargeTotalEnergy"),
    Placement::root("PV Day Energy", "pvDayEnergy"),
    Placement::root("Grid Day Energy", "gridDayEnergy"),
    Placement::root("Load Day Energy", "loadDayEnergy"),
    Placement::root("PV Total Energy", "pvTotalEnergy"),
    Placement::root("Grid Total Energy", "gridTotalEnergy"),
    Placement::root("Load Total Energy", "loadTotalEnergy"),
    Placement::root("Purchasing Day Energy", "purchasingDayEnergy"),
    Placement::root("Purchasing Total Energy", "purchasingTotalEnergy"),
    Placement::root("Power PV1", "pv1Power"),
    Placement::root("Power PV2", "pv2Power"),
];

const ENERGY_TODAY_TOTALS: &[Placement] = &[
    Placement::root("ETT: S BUS Voltage", "sBusVoltage"),
    Placement::root("ETT: N BUS Voltage", "nBusVoltage"),
    Placement::root("ETT: DCDC Temperature", "dcdcTemperature"),
    Placement::grouped("ETT: PV Day Energy", "pv", "day"),
    Placement::grouped("ETT: PV Month Energy", "pv", "month"),
    Placement::grouped("ETT: PV Year Energy", "pv", "year"),
    Placement::grouped("ETT: PV Total Energy", "pv", "total"),
    Placement::grouped("ETT: Grid Day Energy", "grid", "day"),
    Placement::grouped("ETT: Grid Month Energy", "grid", "month"),
    Placement::grouped("ETT: Grid Year Energy", "grid", "year"),
    Placement::grouped("ETT: Grid Total Energy", "grid", "total"),
    Placement::grouped("ETT: Load Day Energy", "load", "day"),
    Placement::grouped("ETT: Load Month Energy", "load", "month"),
    Placement::grouped("ETT: Load Year Energy", "load", "year"),
    Placement::grouped("ETT: Load Total Energy", "load", "total"),
    Placement::grouped("ETT: Purchasing Day Energy", "purchasing", "day"),
    Placement::grouped("ETT: Purchasing Month Energy", "purchasing", "month"),
    Placement::grouped("ETT: Purchasing Year Energy", "purchasing", "year"),
    Placement::grouped("ETT: Purchasing Total Energy", "purchasing", "total"),
    Placement::grouped("ETT: Bat Charge Day Energy", "batteryCharge", "day"),
    Placement::grouped("ETT: Bat Charge Month Energy", "batteryCharge", "month"),
    Placement::grouped("ETT: Bat Charge Year Energy", "batteryCharge", "year"),
    Placement::grouped("ETT: Bat Charge Total Energy", "batteryCharge", "total"),
    Placement::grouped("ETT: Bat Discharge Day Energy", "batteryDischarge", "day"),
    Placement::grouped("ETT: Bat Discharge Month Energy", "batteryDischarge", "month"),
    Placement::grouped("ETT: Bat Discharge Year Energy", "batteryDischarge", "year"),
    Placement::grouped("ETT: Bat Discharge Total Energy", "batteryDischarge", "total"),
];

const GRID_OUTPUT: &[Placement] = &[
    Placement::grouped("GO: Grid A Voltage", "phaseA", "voltage"),
    Placement::grouped("GO: Grid A Current", "phaseA", "current"),
    Placement::grouped("GO: Grid A Power", "phaseA", "power"),
    Placement::grouped("GO: Grid B Voltage", "phaseB", "voltage"),
    Placement::grouped("GO: Grid B Current", "phaseB", "current"),
    Placement::grouped("GO: Grid B Power", "phaseB", "power"),
    Placement::grouped("GO: Grid C Voltage", "phaseC", "voltage"),
    Placement::grouped("GO: Grid C Current", "phaseC", "current"),
    Placement::grouped("GO: Grid C Power", "phaseC", "power"),
    Placement::root("GO: Grid Freq", "frequency"),
    Placement::root("GO: INV1 Temperature", "inverter1Temperature"),
    Placement::root("GO: INV2 Temperature", "inverter2Temperature"),
];

const INVERTER_INFO: &[Placement] = &[
    Placement::grouped("II: INV A Voltage", "phaseA", "voltage"),
    Placement::grouped("II: INV A Current", "phaseA", "current"),
    Placement::grouped("II: INV A Power", "phaseA", "power"),
    Placement::grouped("II: INV A Freq", "phaseA", "frequency"),
    Placement::grouped("II: INV B Voltage", "phaseB", "voltage"),
    Placement::grouped("II: INV B Current", "phaseB", "current"),
    Placement::grouped("II: INV B Power", "phaseB", "power"),
    Placement::grouped("II: INV B Freq", "phaseB", "frequency"),
    Placement::grouped("II: INV C Voltage", "phaseC", "voltage"),
    Placement::grouped("II: INV C Current", "phaseC", "current"),
    Placement::grouped("II: INV C Power", "phaseC", "power"),
    Placement::grouped("II: INV C Freq", "phaseC", "frequency"),
    Placement::root("II: Leak Current", "leakCurrent"),
];

const LOAD_INFO: &[Placement] = &[
    Placement::grouped("LI: Load A Voltage", "phaseA", "voltage"),
    Placement::grouped("LI: Load A Current", "phaseA", "current"),
    Placement::grouped("LI: Load A Power", "phaseA", "power"),
    Placement::grouped("LI: Load A Rate", "phaseA", "rate"),
    Placement::grouped("LI: Load B Voltage", "phaseB", "voltage"),
    Placement::grouped("LI: Load B Current", "phaseB", "current"),
    Placement::grouped("LI: Load B Power", "phaseB", "power"),
    Placement::grouped("LI: Load B Rate", "phaseB", "rate"),
    Placement::grouped("LI: Load C Voltage", "phaseC", "voltage"),
    Placement::grouped("LI: Load C Current", "phaseC", "current"),
    Placement::grouped("LI: Load C Power", "phaseC", "power"),
    Placement::grouped("LI: Load C Rate", "phaseC", "rate"),
    Placement::grouped("LI: Generator Port Voltage A", "generator", "phaseAVoltage"),
    Placement::grouped("LI: Generator Port Voltage B", "generator", "phaseBVoltage"),
    Placement::grouped("LI: Generator Port Voltage C", "generator", "phaseCVoltage"),
];

const BATTERY_OUTPUT: &[Placement] = &[
    Placement::root("BO: BAT Voltage", "voltage"),
    Placement::root("BO: BAT Current", "current"),
    Placement::root("BO: BAT 1 Current", "current1"),
    Placement::root("BO: BAT 2 Current", "current2"),
    Placement::root("BO: BAT 3 Current", "current3"),
    Placement::root("BO: BAT SOC", "stateOfCharge"),
    Placement::root("BO: BAT Temperature", "temperature"),
    Placement::root("BO: BAT Charge Voltage", "chargeVoltage"),
    Placement::root("BO: BAT Charge Current Limit", "chargeCurrentLimit"),
    Placement::root("BO: BAT Discharge Current Limit", "dischargeCurrentLimit"),
    Placement::root("BO: BAT Power", "power"),
    Placement::grouped("BO: BMS BAT Voltage", "bms", "voltage"),
    Placement::grouped("BO: BMS BAT Current", "bms", "current"),
    Placement::grouped("BO: BMS BAT Cell Max Voltage", "cells", "maxVoltage"),
    Placement::grouped("BO: BMS BAT Cell Min Voltage", "cells", "minVoltage"),
    Placement::grouped("BO: BMS BAT Cell Max Temperature", "cells", "maxTemperature"),
    Placement::grouped("BO: BMS BAT Cell Min Temperature", "cells", "minTemperature"),
];

const PV_OUTPUT: &[Placement] = &[
    Placement::grouped("PV: Voltage_PV1", "pv1", "voltage"),
    Placement::grouped("PV: Current_PV1", "pv1", "current"),
    Placement::grouped("PV: Power_PV1", "pv1", "power"),
    Placement::grouped("PV: Voltage_PV2", "pv2", "voltage"),
    Placement::grouped("PV: Current_PV2", "pv2", "current"),
    Placement::grouped("PV: Power_PV2", "pv2", "power"),
];
