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

use crate::control::{ControlRegister, SquareWaveFrequency, SquareWavePolarity};
use crate::registers::{
    RegisterAddresses, CLOCK_RECORD_LENGTH, DEVICE_ADDRESS, HALT_BIT, LAST_ADDRESS, MAX_BLOCK_LENGTH,
    TWELVE_HOUR_BIT,
};
use crate::time::{decode_record, encode_record, TimeFields};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ds1307Error<E> {
    I2c(E),
    InvalidInputData,
    CalendarError,
}

/// DS1307 on an I2C bus.
///
/// Configuration setters only change the driver's buffered state. Nothing is
/// sent to the chip until the next [`Ds1307::commit_time`], which writes the
/// time record and the buffered control register in one transaction.
pub struct Ds1307<I2C> {
    i2c: I2C,
    /// Control register to send with the next commit
    pending_control: ControlRegister,
    /// Control register as last written to or read from the chip
    active_control: ControlRegister,
    halted: bool,
    use_24_hour: bool,
}

impl<I2C, E> Ds1307<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            pending_control: ControlRegister::default(),
            active_control: ControlRegister::default(),
            halted: false,
            use_24_hour: true,
        }
    }

    /// Gives the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Loads the configuration a previous session left on the chip.
    pub fn begin(&mut self) -> Result<(), Ds1307Error<E>> {
        let control = self.read_register(RegisterAddresses::CONTROL as u8)?;
        self.active_control = ControlRegister::from_bits(control);
        self.pending_control = self.active_control;
        self.use_24_hour = self.is_using_24_hour_format()?;
        self.halted = self.is_halted()?;

        debug!(
            "ds1307 begin: control {=u8:#x} 24h {=bool} halted {=bool}",
            control,
            self.use_24_hour,
            self.halted
        );

        Ok(())
    }

    pub(crate) fn read_register(&mut self, addr: u8) -> Result<u8, Ds1307Error<E>> {
        let mut read_buf = [0u8; 1];
        self.read_registers(addr, &mut read_buf)?;
        Ok(read_buf[0])
    }

    /// Sets the register pointer, then reads `payload.len()` bytes from there.
    pub(crate) fn read_registers(&mut self, addr: u8, payload: &mut [u8]) -> Result<(), Ds1307Error<E>> {
        self.i2c
            .write(DEVICE_ADDRESS, &[addr])
            .map_err(Ds1307Error::I2c)?;
        self.i2c
            .read(DEVICE_ADDRESS, payload)
            .map_err(Ds1307Error::I2c)?;

        Ok(())
    }

    /// Writes `payload` starting at `addr` in a single transaction. At most
    /// 32 bytes go out at once.
    pub(crate) fn write_registers(&mut self, addr: u8, payload: &[u8]) -> Result<(), Ds1307Error<E>> {
        debug_assert!(payload.len() <= MAX_BLOCK_LENGTH);

        let mut buf = [0u8; MAX_BLOCK_LENGTH + 1];
        let len = payload.len().min(MAX_BLOCK_LENGTH);
        buf[0] = addr;
        buf[1..=len].copy_from_slice(&payload[..len]);

        self.i2c
            .write(DEVICE_ADDRESS, &buf[..=len])
            .map_err(Ds1307Error::I2c)?;

        Ok(())
    }

    /// Reads any register of the chip, clock registers included. Addresses
    /// past 0x3F yield `None` without bus traffic.
    pub fn read_any_register(&mut self, addr: u8) -> Result<Option<u8>, Ds1307Error<E>> {
        if addr > LAST_ADDRESS {
            return Ok(None);
        }
        self.read_register(addr).map(Some)
    }

    // Setters below take effect on the next commit_time().

    pub fn set_halted(&mut self, halted: bool) {
        self.halted = halted;
    }

    pub fn set_use_24_hour_format(&mut self, use_24_hour: bool) {
        self.use_24_hour = use_24_hour;
    }

    pub fn set_square_wave_enabled(&mut self, enabled: bool) {
        self.pending_control.set_square_wave_enabled(enabled);
    }

    pub fn set_square_wave_frequency(&mut self, freq: SquareWaveFrequency) {
        self.pending_control.set_square_wave_frequency(freq);
    }

    pub fn set_square_wave_polarity(&mut self, polarity: SquareWavePolarity) {
        self.pending_control.set_square_wave_polarity(polarity);
    }

    /// Halt requested for the next commit. See [`Ds1307::is_halted`] for the chip state.
    pub fn halt_requested(&self) -> bool {
        self.halted
    }

    /// Hour format used by the next commit. See
    /// [`Ds1307::is_using_24_hour_format`] for the chip state.
    pub fn use_24_hour_format(&self) -> bool {
        self.use_24_hour
    }

    pub fn pending_control(&self) -> ControlRegister {
        self.pending_control
    }

    pub fn active_control(&self) -> ControlRegister {
        self.active_control
    }

    /// Reads the halt flag from the chip.
    pub fn is_halted(&mut self) -> Result<bool, Ds1307Error<E>> {
        let seconds = self.read_register(RegisterAddresses::SECONDS as u8)?;
        Ok(seconds & HALT_BIT != 0)
    }

    /// Reads the hour format from the chip.
    pub fn is_using_24_hour_format(&mut self) -> Result<bool, Ds1307Error<E>> {
        let hours = self.read_register(RegisterAddresses::HOURS as u8)?;
        Ok(hours & TWELVE_HOUR_BIT == 0)
    }

    // The square-wave getters report the control register as of the last
    // commit_time() or read_time(), not the pending configuration.

    /// Square-wave enable bit from the last `commit_time`/`read_time`.
    pub fn is_square_wave_enabled(&self) -> bool {
        self.active_control.square_wave_enabled()
    }

    /// Square-wave frequency from the last `commit_time`/`read_time`.
    pub fn square_wave_frequency(&self) -> SquareWaveFrequency {
        self.active_control.square_wave_frequency()
    }

    /// Square-wave polarity from the last `commit_time`/`read_time`.
    pub fn square_wave_polarity(&self) -> SquareWavePolarity {
        self.active_control.square_wave_polarity()
    }

    /// Writes the time together with the buffered configuration.
    ///
    /// The hour is encoded in the format selected with
    /// [`Ds1307::set_use_24_hour_format`]; `time.is_24_hour` is ignored and
    /// `time.is_pm` only matters in 12 hour mode. An hour above 12 in 12 hour
    /// mode is taken as afternoon and reduced by 12.
    pub fn commit_time(&mut self, time: &TimeFields) -> Result<(), Ds1307Error<E>> {
        let record = encode_record(time, self.halted, self.use_24_hour, self.pending_control);
        self.write_registers(RegisterAddresses::SECONDS as u8, &record)?;
        self.active_control = self.pending_control;

        debug!("ds1307 commit: record {=[u8]:#x}", &record[..]);

        Ok(())
    }

    /// Switches the chip to 24 hour mode and writes the time.
    pub fn commit_time_24h(&mut self, time: &TimeFields) -> Result<(), Ds1307Error<E>> {
        self.use_24_hour = true;
        self.commit_time(&TimeFields { is_pm: false, ..*time })
    }

    /// Reads the current time. Also refreshes the cached control register.
    pub fn read_time(&mut self) -> Result<TimeFields, Ds1307Error<E>> {
        let mut data = [0u8; CLOCK_RECORD_LENGTH];
        self.read_registers(RegisterAddresses::SECONDS as u8, &mut data)?;

        let (time, control) = decode_record(&data);
        self.active_control = control;

        Ok(time)
    }
}
