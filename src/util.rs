use core::num::TryFromIntError;

pub(crate) fn out_of_range_error() -> TryFromIntError {
    // This is a hack to construct TryFromIntError despite its private
    // constructor. The standard library keeps it private intentionally,
    // to be able to provide error details in the future, but it is unlikely
    // that something more specific than "out of range" will be added.
    u8::try_from(u16::MAX).unwrap_err()
}
