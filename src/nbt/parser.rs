use std::collections::HashMap;

use nom::{
    bytes::complete::take,
    multi::count,
    number::complete::{be_f32, be_f64, be_i16, be_i32, be_i64, be_i8, be_u16, be_u8},
    IResult,
};

use super::types::{Tag, Value};

// Parser for a tag byte
fn parse_tag(input: &[u8]) -> IResult<&[u8], Tag> {
    let (rest, byte) = be_u8(input)?;
    match Tag::try_from(byte) {
        Ok(tag) => Ok((rest, tag)),
        Err(_) => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        ))),
    }
}

// Parser for a length-prefixed UTF-8 string
fn parse_string(input: &[u8]) -> IResult<&[u8], String> {
    let (input, length) = be_u16(input)?;
    let (input, data) = take(length)(input)?;
    Ok((input, String::from_utf8_lossy(data).to_string()))
}

// Parser for a big-endian i32 element count, which must be non-negative
fn parse_len(input: &[u8]) -> IResult<&[u8], usize> {
    let (rest, len) = be_i32(input)?;
    match usize::try_from(len) {
        Ok(len) => Ok((rest, len)),
        Err(_) => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::LengthValue,
        ))),
    }
}

// Parser for a List payload: element tag, element count, then the payloads
fn parse_list(input: &[u8]) -> IResult<&[u8], Vec<Value>> {
    let (input, element_tag) = parse_tag(input)?;
    let (input, element_count) = parse_len(input)?;

    // Empty lists are written with an End element tag
    if element_tag == Tag::End && element_count == 0 {
        return Ok((input, Vec::new()));
    }

    let result = count(|i| parse_payload(i, element_tag), element_count)(input);
    result
}

// Parser for a Compound payload: named entries up to an End tag.
// Duplicate names keep the later entry.
fn parse_compound(mut input: &[u8]) -> IResult<&[u8], HashMap<String, Value>> {
    let mut entries = HashMap::new();
    loop {
        let (rest, tag) = parse_tag(input)?;
        if tag == Tag::End {
            return Ok((rest, entries));
        }
        let (rest, name) = parse_string(rest)?;
        let (rest, value) = parse_payload(rest, tag)?;
        entries.insert(name, value);
        input = rest;
    }
}

// Parser for one payload of the given tag type
fn parse_payload(input: &[u8], tag: Tag) -> IResult<&[u8], Value> {
    match tag {
        // An End tag carries no payload
        Tag::End => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        ))),
        Tag::Byte => be_i8(input).map(|(i, v)| (i, Value::Byte(v))),
        Tag::Short => be_i16(input).map(|(i, v)| (i, Value::Short(v))),
        Tag::Int => be_i32(input).map(|(i, v)| (i, Value::Int(v))),
        Tag::Long => be_i64(input).map(|(i, v)| (i, Value::Long(v))),
        Tag::Float => be_f32(input).map(|(i, v)| (i, Value::Float(v))),
        Tag::Double => be_f64(input).map(|(i, v)| (i, Value::Double(v))),
        Tag::ByteArray => {
            let (input, len) = parse_len(input)?;
            let (input, data) = take(len)(input)?;
            let data = data.iter().map(|&b| b as i8).collect();
            Ok((input, Value::ByteArray(data)))
        }
        Tag::String => parse_string(input).map(|(i, v)| (i, Value::String(v))),
        Tag::List => parse_list(input).map(|(i, v)| (i, Value::List(v))),
        Tag::Compound => parse_compound(input).map(|(i, v)| (i, Value::Compound(v))),
        Tag::IntArray => {
            let (input, len) = parse_len(input)?;
            count(be_i32, len)(input).map(|(i, v)| (i, Value::IntArray(v)))
        }
        Tag::LongArray => {
            let (input, len) = parse_len(input)?;
            count(be_i64, len)(input).map(|(i, v)| (i, Value::LongArray(v)))
        }
    }
}

/// Parser for a complete NBT document: a single named root compound
pub fn parse_nbt_root(input: &[u8]) -> IResult<&[u8], Value> {
    let (rest, tag) = parse_tag(input)?;
    if tag != Tag::Compound {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        )));
    }
    let (rest, _name) = parse_string(rest)?;
    let (rest, root) = parse_compound(rest)?;
    Ok((rest, Value::Compound(root)))
}
