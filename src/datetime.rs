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

use embedded_hal_1::i2c::I2c;

pub use rtcc::{DateTimeAccess, Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::ds1307::{Ds1307, Ds1307Error};
use crate::time::TimeFields;

impl<I2C, E> DateTimeAccess for Ds1307<I2C>
where
    I2C: I2c<Error = E>,
{
    type Error = Ds1307Error<E>;

    fn datetime(&mut self) -> Result<NaiveDateTime, Self::Error> {
        let time = self.read_time()?;

        let datetime = NaiveDate::from_ymd_opt(time.year as i32 + 2000, time.month as u32, time.day as u32)
            .and_then(|date| {
                date.and_hms_opt(time.hour_24() as u32, time.minute as u32, time.second as u32)
            });

        match datetime {
            Some(datetime) => Ok(datetime),
            None => {
                warn!("ds1307 holds no valid calendar date: {}", time);
                Err(Self::Error::CalendarError)
            }
        }
    }

    fn set_datetime(&mut self, datetime: &NaiveDateTime) -> Result<(), Self::Error> {
        if datetime.year() < 2000 || datetime.year() > 2099 {
            return Err(Self::Error::InvalidInputData);
        }

        // commit_time() folds afternoon hours when running in 12 hour mode
        let hour = datetime.hour() as u8;
        let time = TimeFields {
            second: datetime.second() as u8,
            minute: datetime.minute() as u8,
            hour: if !self.use_24_hour_format() && hour == 0 { 12 } else { hour },
            weekday: datetime.weekday().number_from_monday() as u8,
            day: datetime.day() as u8,
            month: datetime.month() as u8,
            year: (datetime.year() - 2000) as u8,
            is_24_hour: self.use_24_hour_format(),
            is_pm: hour >= 12,
        };

        self.commit_time(&time)
    }
}
