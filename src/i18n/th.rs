//! Thai translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Schedules
    t.insert("schedule.low".into(), "ใช้ไฟไม่เกิน 150 หน่วยต่อเดือน".into());
    t.insert("schedule.high".into(), "ใช้ไฟเกิน 150 หน่วยต่อเดือน".into());
    t.insert("schedule.service_charge".into(), "ค่าบริการรายเดือน".into());

    // Report
    t.insert("report.energy".into(), "พลังงาน".into());
    t.insert("report.schedule".into(), "อัตรา".into());
    t.insert("report.block".into(), "ช่วง".into());
    t.insert("report.rate".into(), "ราคาต่อหน่วย".into());
    t.insert("report.units".into(), "หน่วย".into());
    t.insert("report.amount".into(), "จำนวนเงิน".into());
    t.insert("report.service_charge".into(), "ค่าบริการรายวัน".into());
    t.insert("report.cost".into(), "ค่าไฟฟ้า".into());
    t.insert("report.total".into(), "รวม".into());
    t.insert("report.readings".into(), "ค่าที่อ่านได้".into());
    t.insert("report.no_readings".into(), "ไม่พบข้อมูล".into());

    // Units
    t.insert("unit.kilowatt_hours".into(), "หน่วย".into());
    t.insert("unit.per_kwh".into(), "/หน่วย".into());

    t
}
