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

use crate::registers::{SQUARE_WAVE_ENABLE_BIT, SQUARE_WAVE_FREQUENCY_MASK, SQUARE_WAVE_POLARITY_BIT};

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SquareWaveFrequency {
    Hz1 = 0x00u8,
    KHz4 = 0x01u8,
    KHz8 = 0x02u8,
    KHz32 = 0x03u8,
}

impl SquareWaveFrequency {
    fn from_bits(bits: u8) -> Self {
        match bits & SQUARE_WAVE_FREQUENCY_MASK {
            0x00u8 => Self::Hz1,
            0x01u8 => Self::KHz4,
            0x02u8 => Self::KHz8,
            _ => Self::KHz32,
        }
    }
}

/// Output level of the square-wave pin. On the chip a cleared bit 7 selects
/// `High`, a set bit 7 selects `Low`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SquareWavePolarity {
    High,
    Low,
}

/// Image of the control register (0x07).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlRegister(u8);

impl ControlRegister {
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub fn square_wave_enabled(&self) -> bool {
        self.0 & SQUARE_WAVE_ENABLE_BIT != 0
    }

    pub fn set_square_wave_enabled(&mut self, enabled: bool) {
        if enabled {
            self.0 |= SQUARE_WAVE_ENABLE_BIT;
        } else {
            self.0 &= !SQUARE_WAVE_ENABLE_BIT;
        }
    }

    pub fn square_wave_frequency(&self) -> SquareWaveFrequency {
        SquareWaveFrequency::from_bits(self.0)
    }

    pub fn set_square_wave_frequency(&mut self, freq: SquareWaveFrequency) {
        self.0 = (self.0 & !SQUARE_WAVE_FREQUENCY_MASK) | freq as u8;
    }

    pub fn square_wave_polarity(&self) -> SquareWavePolarity {
        if self.0 & SQUARE_WAVE_POLARITY_BIT != 0 {
            SquareWavePolarity::Low
        } else {
            SquareWavePolarity::High
        }
    }

    pub fn set_square_wave_polarity(&mut self, polarity: SquareWavePolarity) {
        match polarity {
            SquareWavePolarity::High => self.0 &= !SQUARE_WAVE_POLARITY_BIT,
            SquareWavePolarity::Low => self.0 |= SQUARE_WAVE_POLARITY_BIT,
        }
    }
}
