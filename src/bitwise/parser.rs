// nom combinators for slicing fixed-size record arrays

use nom::{bytes::complete::take, IResult};

/// Take a single record of `size` bytes
pub fn parse_record<'a>(size: usize) -> impl Fn(&'a [u8]) -> IResult<&'a [u8], &'a [u8]> {
    move |input: &'a [u8]| take(size)(input)
}

/// Parse a u16 little-endian
pub fn parse_u16_le(input: &[u8]) -> IResult<&[u8], u16> {
    let (input, bytes) = take(2usize)(input)?;
    Ok((input, u16::from_le_bytes([bytes[0], bytes[1]])))
}

/// Parse an array of elements using a parser
pub fn parse_array<'a, O, F>(
    count_val: usize,
    mut parser: F,
) -> impl FnMut(&'a [u8]) -> IResult<&'a [u8], Vec<O>>
where
    F: FnMut(&'a [u8]) -> IResult<&'a [u8], O>,
{
    move |mut input: &'a [u8]| {
        let mut results = Vec::with_capacity(count_val);
        for _ in 0..count_val {
            let (remaining, value) = parser(input)?;
            results.push(value);
            input = remaining;
        }
        Ok((input, results))
    }
}

/// Split `count` consecutive records of `size` bytes each
pub fn parse_records<'a>(
    count: usize,
    size: usize,
) -> impl FnMut(&'a [u8]) -> IResult<&'a [u8], Vec<&'a [u8]>> {
    parse_array(count, parse_record(size))
}
