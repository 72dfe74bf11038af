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

//! Battery-backed scratch RAM (0x08..=0x3F).
//!
//! Offsets are relative to the first scratch byte. A request that does not
//! fit completely into the 56 bytes is dropped without any bus traffic and
//! without reporting an error. Longer transfers are split into blocks of at
//! most 32 bytes, issued in ascending address order.

use embedded_hal_1::i2c::I2c;

use crate::ds1307::{Ds1307, Ds1307Error};
use crate::registers::{ram_address, LAST_ADDRESS, MAX_BLOCK_LENGTH};

/// Length of the next block starting at `addr` with `remaining` bytes left.
fn block_length(addr: u8, remaining: usize) -> usize {
    let to_end = (LAST_ADDRESS - addr) as usize + 1;
    remaining.min(MAX_BLOCK_LENGTH).min(to_end)
}

impl<I2C, E> Ds1307<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn read_ram_byte(&mut self, offset: u8) -> Result<Option<u8>, Ds1307Error<E>> {
        let Some(addr) = ram_address(offset, 1) else {
            warn!("ds1307 ram read of offset {=u8} out of range, dropped", offset);
            return Ok(None);
        };

        self.read_register(addr).map(Some)
    }

    /// Fills `buf` from scratch RAM starting at `offset`. `buf` is left
    /// untouched when the range does not fit.
    pub fn read_ram(&mut self, offset: u8, buf: &mut [u8]) -> Result<(), Ds1307Error<E>> {
        if buf.is_empty() {
            return Ok(());
        }
        let Some(mut addr) = ram_address(offset, buf.len()) else {
            warn!(
                "ds1307 ram read of {=usize} bytes at offset {=u8} out of range, dropped",
                buf.len(),
                offset
            );
            return Ok(());
        };

        let mut index = 0;
        while index < buf.len() {
            let len = block_length(addr, buf.len() - index);
            trace!("ds1307 ram read {=usize} bytes at {=u8:#x}", len, addr);

            self.read_registers(addr, &mut buf[index..index + len])?;

            index += len;
            addr += len as u8;
        }

        Ok(())
    }

    pub fn write_ram_byte(&mut self, offset: u8, value: u8) -> Result<(), Ds1307Error<E>> {
        let Some(addr) = ram_address(offset, 1) else {
            warn!("ds1307 ram write of offset {=u8} out of range, dropped", offset);
            return Ok(());
        };

        self.write_registers(addr, &[value])
    }

    /// Stores `data` in scratch RAM starting at `offset`. Nothing is written
    /// when the range does not fit.
    pub fn write_ram(&mut self, offset: u8, data: &[u8]) -> Result<(), Ds1307Error<E>> {
        if data.is_empty() {
            return Ok(());
        }
        let Some(mut addr) = ram_address(offset, data.len()) else {
            warn!(
                "ds1307 ram write of {=usize} bytes at offset {=u8} out of range, dropped",
                data.len(),
                offset
            );
            return Ok(());
        };

        for block in data.chunks(MAX_BLOCK_LENGTH) {
            // the range check above keeps every block below the last address
            let len = block_length(addr, block.len());
            trace!("ds1307 ram write {=usize} bytes at {=u8:#x}", len, addr);

            self.write_registers(addr, &block[..len])?;
            addr += len as u8;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::DEVICE_ADDRESS as ADDR;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
    use std::vec;

    fn pattern(len: usize) -> Vec<u8> {
        (0..len as u8).map(|b| b.wrapping_mul(7).wrapping_add(1)).collect()
    }

    #[test]
    fn block_length_clamps_to_bus_and_chip_limits() {
        assert_eq!(block_length(0x08, 40), 32);
        assert_eq!(block_length(0x28, 8), 8);
        assert_eq!(block_length(0x3C, 10), 4);
        assert_eq!(block_length(0x3F, 1), 1);
    }

    #[test]
    fn single_byte_access() {
        let expectations = [
            I2cTrans::write(ADDR, vec![0x0A, 0x42]),
            I2cTrans::write(ADDR, vec![0x0A]),
            I2cTrans::read(ADDR, vec![0x42]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let mut rtc = Ds1307::new(i2c.clone());

        rtc.write_ram_byte(2, 0x42).unwrap();
        assert_eq!(rtc.read_ram_byte(2).unwrap(), Some(0x42));

        i2c.done();
    }

    #[test]
    fn single_byte_access_past_the_end_is_dropped() {
        let mut i2c = I2cMock::new(&[]);
        let mut rtc = Ds1307::new(i2c.clone());

        rtc.write_ram_byte(56, 0x42).unwrap();
        assert_eq!(rtc.read_ram_byte(56).unwrap(), None);

        i2c.done();
    }

    #[test]
    fn long_write_is_split_at_32_bytes() {
        let data = pattern(40);

        let mut first = vec![0x08];
        first.extend_from_slice(&data[..32]);
        let mut second = vec![0x28];
        second.extend_from_slice(&data[32..]);

        let expectations = [I2cTrans::write(ADDR, first), I2cTrans::write(ADDR, second)];
        let mut i2c = I2cMock::new(&expectations);
        let mut rtc = Ds1307::new(i2c.clone());

        rtc.write_ram(0, &data).unwrap();

        i2c.done();
    }

    #[test]
    fn long_read_is_split_at_32_bytes() {
        let data = pattern(56);

        let expectations = [
            I2cTrans::write(ADDR, vec![0x08]),
            I2cTrans::read(ADDR, data[..32].to_vec()),
            I2cTrans::write(ADDR, vec![0x28]),
            I2cTrans::read(ADDR, data[32..].to_vec()),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let mut rtc = Ds1307::new(i2c.clone());

        let mut buf = [0u8; 56];
        rtc.read_ram(0, &mut buf).unwrap();
        assert_eq!(&buf[..], &data[..]);

        i2c.done();
    }

    #[test]
    fn request_running_past_the_end_is_dropped() {
        let mut i2c = I2cMock::new(&[]);
        let mut rtc = Ds1307::new(i2c.clone());

        rtc.write_ram(54, &[0xFF; 10]).unwrap();

        let mut buf = [0x5Au8; 10];
        rtc.read_ram(54, &mut buf).unwrap();
        assert_eq!(buf, [0x5A; 10]);

        i2c.done();
    }

    #[test]
    fn empty_request_is_a_no_op() {
        let mut i2c = I2cMock::new(&[]);
        let mut rtc = Ds1307::new(i2c.clone());

        rtc.write_ram(0, &[0u8; 0]).unwrap();
        rtc.read_ram(0, &mut [0u8; 0]).unwrap();

        i2c.done();
    }

    #[test]
    fn tail_of_the_ram_is_reachable() {
        let expectations = [
            I2cTrans::write(ADDR, vec![0x3E, 0x01, 0x02]),
            I2cTrans::write(ADDR, vec![0x3E]),
            I2cTrans::read(ADDR, vec![0x01, 0x02]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let mut rtc = Ds1307::new(i2c.clone());

        rtc.write_ram(54, &[0x01, 0x02]).unwrap();
        let mut buf = [0u8; 2];
        rtc.read_ram(54, &mut buf).unwrap();
        assert_eq!(buf, [0x01, 0x02]);

        i2c.done();
    }
}
