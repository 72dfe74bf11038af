/* DS1307 real-time clock driver
 * Copyright (C) 2025 Sebastian Quilitz
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use rtcc::Hours;

use crate::control::ControlRegister;
use crate::registers::{
    bcd_to_dec, dec_to_bcd, RegisterAddresses, CLOCK_RECORD_LENGTH, HALT_BIT, HOURS_12_MASK,
    HOURS_24_MASK, PM_BIT, SECONDS_MASK, TWELVE_HOUR_BIT,
};

/// One wall-clock reading as the chip stores it.
///
/// `hour` is 0-23 when `is_24_hour` is set, otherwise 1-12 with `is_pm`
/// telling the half of the day. Values outside the documented ranges are
/// not checked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeFields {
    pub second: u8,
    pub minute: u8,
    pub hour: u8,
    /// 1-7
    pub weekday: u8,
    /// 1-31
    pub day: u8,
    /// 1-12
    pub month: u8,
    /// Two digit year, 0-99
    pub year: u8,
    pub is_24_hour: bool,
    pub is_pm: bool,
}

impl TimeFields {
    pub fn hours(&self) -> Hours {
        match (self.is_24_hour, self.is_pm) {
            (true, _) => Hours::H24(self.hour),
            (false, false) => Hours::AM(self.hour),
            (false, true) => Hours::PM(self.hour),
        }
    }

    /// Hour of the day in 0-23 regardless of the stored format.
    pub fn hour_24(&self) -> u8 {
        match self.hours() {
            Hours::H24(h) => h,
            Hours::AM(12) => 0,
            Hours::AM(h) => h,
            Hours::PM(12) => 12,
            Hours::PM(h) => h + 12,
        }
    }
}

/// Hours register value. In 12 hour mode a 24 hour style value (13-23) is
/// folded into the afternoon instead of producing an invalid register.
pub(crate) fn encode_hours(hour: u8, pm: bool, use_24_hour: bool) -> u8 {
    if use_24_hour {
        return dec_to_bcd(hour);
    }

    let (hour, pm) = if hour > 12 { (hour - 12, true) } else { (hour, pm) };

    let mut reg = dec_to_bcd(hour) | TWELVE_HOUR_BIT;
    if pm {
        reg |= PM_BIT;
    }
    reg
}

/// Builds the eight byte clock record starting at register 0x00.
pub(crate) fn encode_record(
    time: &TimeFields,
    halted: bool,
    use_24_hour: bool,
    control: ControlRegister,
) -> [u8; CLOCK_RECORD_LENGTH] {
    let mut seconds = dec_to_bcd(time.second);
    if halted {
        seconds |= HALT_BIT;
    }

    let mut record = [0u8; CLOCK_RECORD_LENGTH];
    record[RegisterAddresses::SECONDS as usize] = seconds;
    record[RegisterAddresses::MINUTES as usize] = dec_to_bcd(time.minute);
    record[RegisterAddresses::HOURS as usize] = encode_hours(time.hour, time.is_pm, use_24_hour);
    record[RegisterAddresses::WEEKDAY as usize] = dec_to_bcd(time.weekday);
    record[RegisterAddresses::DATE as usize] = dec_to_bcd(time.day);
    record[RegisterAddresses::MONTH as usize] = dec_to_bcd(time.month);
    record[RegisterAddresses::YEAR as usize] = dec_to_bcd(time.year);
    record[RegisterAddresses::CONTROL as usize] = control.bits();
    record
}

pub(crate) fn decode_record(data: &[u8; CLOCK_RECORD_LENGTH]) -> (TimeFields, ControlRegister) {
    let reg = |addr: RegisterAddresses| data[addr as usize];

    let hours = reg(RegisterAddresses::HOURS);
    let (hour, is_24_hour, is_pm) = if hours & TWELVE_HOUR_BIT != 0 {
        (bcd_to_dec(hours & HOURS_12_MASK), false, hours & PM_BIT != 0)
    } else {
        (bcd_to_dec(hours & HOURS_24_MASK), true, false)
    };

    let time = TimeFields {
        second: bcd_to_dec(reg(RegisterAddresses::SECONDS) & SECONDS_MASK),
        minute: bcd_to_dec(reg(RegisterAddresses::MINUTES)),
        hour,
        weekday: bcd_to_dec(reg(RegisterAddresses::WEEKDAY)),
        day: bcd_to_dec(reg(RegisterAddresses::DATE)),
        month: bcd_to_dec(reg(RegisterAddresses::MONTH)),
        year: bcd_to_dec(reg(RegisterAddresses::YEAR)),
        is_24_hour,
        is_pm,
    };

    (time, ControlRegister::from_bits(reg(RegisterAddresses::CONTROL)))
}
