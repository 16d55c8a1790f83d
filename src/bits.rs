//! Bit-range extraction and named-flag table utilities.
//!
//! `least`/`mid`/`most` pull unsigned subranges out of a machine word. The
//! flag-table helpers turn an integer magic number into a named view using a
//! declared `FlagTable` (name -> single-bit mask); single-mask membership is
//! delegated to `bitops::BitOps`.

use bitops::BitOps;

use crate::error::{DecodeError, Result};

/// A flag table: an immutable list of (name, single-bit mask) pairs.
pub type FlagTable = &'static [(&'static str, u32)];

/// Returns the `x` least-significant bits of `v`.
pub fn least(x: u32, v: u32) -> u32 {
    v & ((1u32 << x) - 1)
}

/// Returns the `x` bits of `v` starting at bit `s`, left in place (not shifted down).
pub fn mid(s: u32, x: u32, v: u32) -> u32 {
    v & (((1u32 << x) - 1) << s)
}

/// Returns `v` shifted right by `s` bits.
pub fn most(s: u32, v: u32) -> u32 {
    v >> s
}

/// Returns the list of names in `table` whose mask is fully set in `value`.
pub fn flags_list(table: FlagTable, value: u32) -> Vec<&'static str> {
    if value == 0 {
        return Vec::new();
    }
    table
        .iter()
        .filter(|(_, mask)| value.is_flag_set(*mask))
        .map(|(name, _)| *name)
        .collect()
}

/// Returns every name in `table` mapped to whether its mask is set in `value`.
pub fn flags_map(table: FlagTable, value: u32) -> Vec<(&'static str, bool)> {
    table
        .iter()
        .map(|(name, mask)| (*name, value.is_flag_set(*mask)))
        .collect()
}

/// Returns whether the named flag is set in `value`.
pub fn flag_get(table: FlagTable, value: u32, name: &'static str) -> Result<bool> {
    let mask = lookup(table, name)?;
    Ok(value.is_flag_set(mask))
}

/// Returns `value` with the named flag's mask OR'd in.
pub fn flag_set(table: FlagTable, value: u32, name: &'static str) -> Result<u32> {
    let mask = lookup(table, name)?;
    Ok(value | mask)
}

/// Returns `value` with the named flag's mask AND-NOT'd out.
pub fn flag_unset(table: FlagTable, value: u32, name: &'static str) -> Result<u32> {
    let mask = lookup(table, name)?;
    Ok(value & !mask)
}

fn lookup(table: FlagTable, name: &'static str) -> Result<u32> {
    table
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, mask)| *mask)
        .ok_or(DecodeError::UnknownFlag(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRUIT: FlagTable = &[("apple", 1 << 0), ("pear", 1 << 1), ("plum", 1 << 2)];

    #[test]
    fn least_mid_most() {
        let v = 0b1011_0110u32;
        assert_eq!(least(4, v), 0b0110);
        assert_eq!(mid(4, 4, v), 0b1011_0000);
        assert_eq!(most(4, v), 0b1011);
    }

    #[test]
    fn flags_list_empty_on_zero() {
        for table in [FRUIT] {
            assert_eq!(flags_list(table, 0), Vec::<&str>::new());
        }
    }

    #[test]
    fn flags_list_and_map() {
        let v = 0b101u32; // apple + plum
        assert_eq!(flags_list(FRUIT, v), vec!["apple", "plum"]);
        assert_eq!(
            flags_map(FRUIT, v),
            vec![("apple", true), ("pear", false), ("plum", true)]
        );
    }

    #[test]
    fn flag_get_unknown() {
        assert_eq!(
            flag_get(FRUIT, 0, "banana"),
            Err(DecodeError::UnknownFlag("banana"))
        );
    }

    #[test]
    fn set_unset_roundtrip() {
        // P7: flag_set(flag_unset(v, n), n) == v | mask
        for v in 0u32..8 {
            let unset = flag_unset(FRUIT, v, "pear").unwrap();
            let reset = flag_set(FRUIT, unset, "pear").unwrap();
            assert_eq!(reset, v | (1 << 1));
        }
    }
}
