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

//! Driver for the Maxim DS1307 I2C real-time clock.
//!
//! The chip keeps time in BCD registers 0x00..=0x06, has a square-wave
//! control register at 0x07 and 56 bytes of battery-backed RAM behind it.
//! Configuration changes are buffered in the driver and written together
//! with the time by [`Ds1307::commit_time`].
//!
//! The bus has to be initialised before any call into the driver.

#![cfg_attr(not(test), no_std)]

// must go first, the other modules use its macros
mod fmt;

mod control;
mod datetime;
mod ds1307;
mod nvram;
pub mod registers;
mod time;

pub use control::{ControlRegister, SquareWaveFrequency, SquareWavePolarity};
pub use datetime::{DateTimeAccess, Datelike, NaiveDate, NaiveDateTime, Timelike};
pub use ds1307::{Ds1307, Ds1307Error};
pub use rtcc::Hours;
pub use time::TimeFields;
