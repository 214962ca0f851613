//! Stream formats for tabulated functions.
//!
//! Binary: `[i32 count]` followed by `count` pairs `[f64 x][f64 y]`, all
//! big-endian, first point first, no padding and no version field.
//!
//! Text: the same content in decimal, whitespace separated, count first,
//! one `x y` pair per line when written.
//!
//! Readers rebuild the function by appending to an empty one, and reject
//! streams whose x values are not strictly ascending. Both readers stop
//! right after the last declared point.

use std::io::{
    self,
    BufRead,
    Read,
    Write
};

use log::warn;

use crate::math::function::tabulated::functionpoint::FunctionPoint;
use crate::math::function::tabulated::tabulatedfunction::{
    append_in_order,
    TabulatedFunction
};
use crate::math::function::tabulated::tabulatedfunctionerror::TabulatedFunctionError;

fn stream_count<F>(function: &F) -> Result<i32, TabulatedFunctionError> where
    F: TabulatedFunction + ?Sized {
    i32::try_from(function.points_count()).map_err(|_| TabulatedFunctionError::invalid_data(
        format!("{} points do not fit the 32-bit count prefix", function.points_count())
    ))
}

pub fn output_tabulated_function<F, W>(function: &F, out: &mut W) -> Result<(), TabulatedFunctionError> where
    F: TabulatedFunction + ?Sized,
    W: Write {
    out.write_all(&stream_count(function)?.to_be_bytes())?;
    for point in function.points() {
        out.write_all(&point.x().to_be_bytes())?;
        out.write_all(&point.y().to_be_bytes())?;
    }
    out.flush()?;
    Ok(())
}

fn read_f64<R>(input: &mut R) -> io::Result<f64> where
    R: Read {
    let mut buffer = [0u8; 8];
    input.read_exact(&mut buffer)?;
    Ok(f64::from_be_bytes(buffer))
}

pub fn input_tabulated_function<T, R>(input: &mut R) -> Result<T, TabulatedFunctionError> where
    T: TabulatedFunction + Default,
    R: Read {
    let mut buffer = [0u8; 4];
    input.read_exact(&mut buffer)?;
    let count = i32::from_be_bytes(buffer);
    if count < 0 {
        warn!("rejecting binary stream with negative count {}", count);
        return Err(TabulatedFunctionError::invalid_data(format!("negative point count {}", count)));
    }

    let mut function = T::default();
    for _ in 0..count {
        let x = read_f64(input)?;
        let y = read_f64(input)?;
        append_in_order(&mut function, FunctionPoint::new(x, y))?;
    }
    Ok(function)
}

pub fn write_tabulated_function<F, W>(function: &F, out: &mut W) -> Result<(), TabulatedFunctionError> where
    F: TabulatedFunction + ?Sized,
    W: Write {
    writeln!(out, "{}", stream_count(function)?)?;
    for point in function.points() {
        writeln!(out, "{} {}", point.x(), point.y())?;
    }
    out.flush()?;
    Ok(())
}

/// Next whitespace-delimited token. Leading whitespace is skipped and the
/// delimiter after the token is left in the stream.
fn next_token<R>(input: &mut R, what: &str) -> Result<String, TabulatedFunctionError> where
    R: BufRead {
    let mut token = Vec::new();
    loop {
        let buffer = match input.fill_buf() {
            Ok(buffer) => buffer,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => return Err(error.into())
        };
        if buffer.is_empty() {
            break;
        }

        let mut used = 0;
        let mut complete = false;
        for &byte in buffer {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    complete = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }
        input.consume(used);
        if complete {
            break;
        }
    }

    if token.is_empty() {
        return Err(TabulatedFunctionError::IoFailure(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("stream ended while reading {}", what)
        )));
    }
    String::from_utf8(token).map_err(|_| {
        warn!("non UTF-8 bytes while reading {}", what);
        TabulatedFunctionError::invalid_data(format!("{} is not valid UTF-8", what))
    })
}

fn parse_token<T>(token: &str, what: &str) -> Result<T, TabulatedFunctionError> where
    T: std::str::FromStr,
    T::Err: std::fmt::Display {
    token.parse::<T>().map_err(|error| {
        warn!("cannot parse {} from '{}'", what, token);
        TabulatedFunctionError::invalid_data(format!("cannot parse {} from '{}': {}", what, token, error))
    })
}

fn read_token<T, R>(input: &mut R, what: &str) -> Result<T, TabulatedFunctionError> where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    R: BufRead {
    parse_token(&next_token(input, what)?, what)
}

/// Reads the text form, consuming nothing past the last declared point, so
/// several functions can be read back to back from one stream.
pub fn read_tabulated_function<T, R>(input: &mut R) -> Result<T, TabulatedFunctionError> where
    T: TabulatedFunction + Default,
    R: BufRead {
    let count: usize = read_token(input, "the point count")?;
    let mut function = T::default();
    for _ in 0..count {
        let x: f64 = read_token(input, "an x value")?;
        let y: f64 = read_token(input, "a y value")?;
        append_in_order(&mut function, FunctionPoint::new(x, y))?;
    }
    Ok(function)
}
