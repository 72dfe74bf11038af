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

//! Address map and bit layout of the DS1307.

/// 7-bit bus address of the DS1307. Not configurable on the chip.
pub const DEVICE_ADDRESS: u8 = 0x68;

/// Largest number of data bytes moved in a single bus transaction.
pub const MAX_BLOCK_LENGTH: usize = 32;

/// First address of the user scratch RAM.
pub const RAM_BASE_ADDRESS: u8 = 0x08;
/// Last valid address of the chip.
pub const LAST_ADDRESS: u8 = 0x3F;
/// Size of the user scratch RAM in bytes.
pub const RAM_SIZE: usize = (LAST_ADDRESS - RAM_BASE_ADDRESS) as usize + 1;

/// Number of bytes in the clock record including the control register.
pub const CLOCK_RECORD_LENGTH: usize = 8;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegisterAddresses {
    /// Seconds, bit 7 is the clock halt flag
    SECONDS = 0x00,
    MINUTES = 0x01,
    /// Hours, bit 6 selects 12 hour mode, bit 5 is PM in 12 hour mode
    HOURS = 0x02,
    WEEKDAY = 0x03,
    DATE = 0x04,
    MONTH = 0x05,
    YEAR = 0x06,
    /// Square-wave output configuration
    CONTROL = 0x07,
}

pub const HALT_BIT: u8 = 0x80;
pub const SECONDS_MASK: u8 = 0x7F;

pub const TWELVE_HOUR_BIT: u8 = 0x40;
pub const PM_BIT: u8 = 0x20;
pub const HOURS_12_MASK: u8 = 0x1F;
pub const HOURS_24_MASK: u8 = 0x3F;

pub const SQUARE_WAVE_POLARITY_BIT: u8 = 0x80;
pub const SQUARE_WAVE_ENABLE_BIT: u8 = 0x10;
pub const SQUARE_WAVE_FREQUENCY_MASK: u8 = 0x03;

/// Packs a value in 0..=99 into two BCD digits.
pub fn dec_to_bcd(dec: u8) -> u8 {
    (dec / 10) * 16 + (dec % 10)
}

/// Unpacks two BCD digits into their decimal value.
pub fn bcd_to_dec(bcd: u8) -> u8 {
    (bcd / 16) * 10 + (bcd % 16)
}

/// Bus address of a user scratch RAM offset, or `None` if `offset + len`
/// does not fit into the scratch RAM.
pub(crate) fn ram_address(offset: u8, len: usize) -> Option<u8> {
    if offset as usize + len > RAM_SIZE {
        return None;
    }

    Some(RAM_BASE_ADDRESS + offset)
}
