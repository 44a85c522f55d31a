//! Checked printf wrappers.
//!
//! Each macro const-evaluates the scanner over its format literal, asserts
//! the contract for the argument tuple (a violation fails the build), and
//! only then forwards everything unchanged to the platform primitive.
//! Nothing here formats bytes itself.

/// Checked `printf`: validates the contract at compile time, then calls
/// `libc::printf`. Evaluates to the `c_int` the primitive returns.
///
/// The format string must be a literal; runtime-only formats are
/// unsupported by design.
///
/// Argument expressions are evaluated twice, once for the check tuple and
/// once for the forwarded call; keep them side-effect free.
///
/// # Safety
///
/// The expansion contains the FFI call in an internal `unsafe` block. The
/// contract check guarantees the argument *types* agree with the format;
/// pointer arguments must still be valid for the conversion that reads
/// them (`%s` needs a NUL-terminated string, `%n` a writable target).
#[macro_export]
macro_rules! tsprintf {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        const __TS_BITS: u64 = $crate::__private::encode($fmt);
        $crate::__private::typecheck_args::<__TS_BITS, _>(&($($arg,)*));
        unsafe {
            $crate::__private::libc::printf(
                concat!($fmt, "\0").as_ptr().cast::<$crate::__private::libc::c_char>(),
                $($arg),*
            )
        }
    }};
}

/// Checked `fprintf`: like [`tsprintf!`] with an explicit `*mut libc::FILE`
/// destination.
///
/// # Safety
///
/// Same caveats as [`tsprintf!`]; `$stream` must additionally be a valid
/// open stream.
#[macro_export]
macro_rules! tsfprintf {
    ($stream:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        const __TS_BITS: u64 = $crate::__private::encode($fmt);
        $crate::__private::typecheck_args::<__TS_BITS, _>(&($($arg,)*));
        unsafe {
            $crate::__private::libc::fprintf(
                $stream,
                concat!($fmt, "\0").as_ptr().cast::<$crate::__private::libc::c_char>(),
                $($arg),*
            )
        }
    }};
}

/// Checked `snprintf` into a byte buffer whose capacity is inferred from
/// the buffer itself (`[u8; N]`, `Vec<u8>`, `&mut [u8]`).
///
/// Output is NUL-terminated and truncated to the buffer length, the
/// `snprintf` way. Uses `snprintf` internally; plain `sprintf` is more
/// error-prone.
///
/// # Safety
///
/// Same caveats as [`tsprintf!`].
#[macro_export]
macro_rules! tssprintf {
    ($buf:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        const __TS_BITS: u64 = $crate::__private::encode($fmt);
        $crate::__private::typecheck_args::<__TS_BITS, _>(&($($arg,)*));
        let __ts_dst: &mut [u8] = &mut $buf[..];
        unsafe {
            $crate::__private::libc::snprintf(
                __ts_dst.as_mut_ptr().cast::<$crate::__private::libc::c_char>(),
                __ts_dst.len(),
                concat!($fmt, "\0").as_ptr().cast::<$crate::__private::libc::c_char>(),
                $($arg),*
            )
        }
    }};
}

/// Checked `snprintf` with an explicit destination pointer and capacity,
/// for callers that already hold a raw `*mut c_char`.
///
/// # Safety
///
/// Same caveats as [`tsprintf!`]; `$dst` must be valid for `$cap` bytes.
#[macro_export]
macro_rules! tssnprintf {
    ($dst:expr, $cap:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        const __TS_BITS: u64 = $crate::__private::encode($fmt);
        $crate::__private::typecheck_args::<__TS_BITS, _>(&($($arg,)*));
        unsafe {
            $crate::__private::libc::snprintf(
                $dst,
                $cap,
                concat!($fmt, "\0").as_ptr().cast::<$crate::__private::libc::c_char>(),
                $($arg),*
            )
        }
    }};
}
