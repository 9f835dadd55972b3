#![cfg(test)]

use std::fmt::Write as _;

use anyhow::{anyhow, bail, Context, Result};

use crate::{
    binary::{Bin16, Bin32},
    conv::ParseError,
    ctx::RoundingMode,
};

/// One `A B EXPECTED FLAGS` row from a batch stream.
///
/// The flags field is an opaque token carried through to the
/// output; no exception semantics are attached to it here.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Row<'a> {
    pub lhs: &'a str,
    pub rhs: &'a str,
    pub want: &'a str,
    pub flags: &'a str,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn parse(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            _ => bail!("unknown operator: `{s}`"),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Format {
    Bin16,
    Bin32,
}

/// A parsed batch stream: the header's format, rounding mode,
/// and operator, plus every row that follows.
#[derive(Debug)]
pub struct Session<'a> {
    pub format: Format,
    pub rounding: RoundingMode,
    pub op: Op,
    pub rows: Vec<Row<'a>>,
}

pub fn parse(s: &str) -> Result<Session<'_>> {
    let mut lines = s
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with("--"));

    let (_, header) = lines.next().context("missing session header")?;
    let mut fields = header.split_ascii_whitespace();
    let format = match fields.next().context("header missing a format")? {
        "h" => Format::Bin16,
        "f" => Format::Bin32,
        v => bail!("unknown format: `{v}`"),
    };
    let mode = fields.next().context("header missing a rounding mode")?;
    let rounding = RoundingMode::try_from_str(mode)
        .with_context(|| format!("invalid rounding mode: `{mode}`"))?;
    let op = Op::parse(fields.next().context("header missing an operator")?)?;
    if let Some(extra) = fields.next() {
        bail!("unexpected token in header: `{extra}`");
    }

    let mut rows = Vec::new();
    for (i, line) in lines {
        let mut fields = line.split_ascii_whitespace();
        let lhs = fields
            .next()
            .with_context(|| format!("#{i}: row missing first operand"))?;
        let rhs = fields
            .next()
            .with_context(|| format!("#{i}: row missing second operand"))?;
        let want = fields
            .next()
            .with_context(|| format!("#{i}: row missing expected result"))?;
        let flags = fields
            .next()
            .with_context(|| format!("#{i}: row missing exception flags"))?;
        if let Some(extra) = fields.next() {
            bail!("#{i}: unexpected token in row: `{extra}`");
        }
        rows.push(Row {
            lhs,
            rhs,
            want,
            flags,
        });
    }
    if rows.is_empty() {
        bail!("stream has no rows");
    }
    Ok(Session {
        format,
        rounding,
        op,
        rows,
    })
}

impl Session<'_> {
    /// Runs every row through `B`, checking each computed
    /// result against the row's expected bits.
    ///
    /// On success it returns the emitted protocol lines: the
    /// zero-padded uppercase hex of both operands and the
    /// computed result, then the echoed flags token, in input
    /// order.
    pub fn run<B: Backend>(&self) -> Result<String> {
        let mut out = String::new();
        for (i, row) in self.rows.iter().enumerate() {
            let lhs = B::parse_bits(row.lhs)
                .map_err(|err| anyhow!("#{i}: bad first operand `{}`: {err}", row.lhs))?;
            let rhs = B::parse_bits(row.rhs)
                .map_err(|err| anyhow!("#{i}: bad second operand `{}`: {err}", row.rhs))?;
            let want = B::parse_bits(row.want)
                .map_err(|err| anyhow!("#{i}: bad expected result `{}`: {err}", row.want))?;

            let got = B::eval(self.op, lhs, rhs, self.rounding);
            if got.bits() != want.bits() {
                bail!(
                    "#{i}: got {:0width$X}, expected {:0width$X}",
                    got.bits(),
                    want.bits(),
                    width = B::HEX_DIGITS,
                );
            }
            writeln!(
                out,
                "{:0width$X} {:0width$X} {:0width$X} {}",
                lhs.bits(),
                rhs.bits(),
                got.bits(),
                row.flags,
                width = B::HEX_DIGITS,
            )?;
        }
        Ok(out)
    }
}

/// One engine format driven by the batch protocol.
pub trait Backend: Copy {
    /// The zero-padded width of one encoded word.
    const HEX_DIGITS: usize;

    fn parse_bits(s: &str) -> Result<Self, ParseError>;
    fn bits(self) -> u64;
    fn eval(op: Op, lhs: Self, rhs: Self, rounding: RoundingMode) -> Self;
}

macro_rules! impl_bintest {
    ($name:ident) => {
        impl Backend for $name {
            const HEX_DIGITS: usize = $name::BYTES * 2;

            fn parse_bits(s: &str) -> Result<Self, ParseError> {
                $name::parse_bits(s)
            }

            fn bits(self) -> u64 {
                u64::from(self.to_bits())
            }

            fn eval(op: Op, lhs: Self, rhs: Self, rounding: RoundingMode) -> Self {
                match op {
                    Op::Add => lhs.add(rhs, rounding),
                    Op::Sub => lhs.sub(rhs, rounding),
                    Op::Mul => lhs.mul(rhs, rounding),
                    Op::Div => lhs.div(rhs, rounding),
                }
            }
        }
    };
}
impl_bintest!(Bin16);
impl_bintest!(Bin32);

/// Parses and runs a stream, dispatching on the header's
/// format.
pub fn run(s: &str) -> Result<String> {
    let session = parse(s)?;
    match session.format {
        Format::Bin16 => session.run::<Bin16>(),
        Format::Bin32 => session.run::<Bin32>(),
    }
}

mod tests {
    use super::*;

    #[test]
    fn test_b32_add_nearest_even() {
        const STREAM: &str = "\
-- binary32, round to nearest even, addition
f 1 +
3F800000 40000000 40400000 xi
42F7147B 3C4985F0 42F71AC7 x-
7F800000 FF800000 7FC00000 v-
00000001 00000001 00000002 x-
7F7FFFFF 7F7FFFFF 7F800000 ox
80000000 00000000 00000000 --
";
        const WANT: &str = "\
3F800000 40000000 40400000 xi
42F7147B 3C4985F0 42F71AC7 x-
7F800000 FF800000 7FC00000 v-
00000001 00000001 00000002 x-
7F7FFFFF 7F7FFFFF 7F800000 ox
80000000 00000000 00000000 --
";
        let session = parse(STREAM).unwrap();
        assert_eq!(session.format, Format::Bin32);
        assert_eq!(session.rounding, RoundingMode::ToNearestEven);
        assert_eq!(session.op, Op::Add);
        assert_eq!(session.rows.len(), 6);
        let got = session.run::<Bin32>().unwrap();
        assert_eq!(got, WANT);
    }

    #[test]
    fn test_b32_sub_toward_negative() {
        const STREAM: &str = "\
f 3 -
3F800000 3F800000 80000000 --
40490FDB 40490FDB 80000000 --
00800000 00000001 007FFFFF x-
BF800000 3F800000 C0000000 --
";
        let got = run(STREAM).unwrap();
        assert_eq!(
            got,
            "\
3F800000 3F800000 80000000 --
40490FDB 40490FDB 80000000 --
00800000 00000001 007FFFFF x-
BF800000 3F800000 C0000000 --
"
        );
    }

    #[test]
    fn test_b16_mul_toward_zero() {
        const STREAM: &str = "\
h 0 *
7BFF 4000 7BFF ox
0400 3800 0200 ux
0001 0001 0000 ux
3555 3555 2F1B x-
";
        let got = run(STREAM).unwrap();
        assert_eq!(
            got,
            "\
7BFF 4000 7BFF ox
0400 3800 0200 ux
0001 0001 0000 ux
3555 3555 2F1B x-
"
        );
    }

    #[test]
    fn test_b32_div_toward_positive() {
        const STREAM: &str = "\
f 2 /
3F800000 40400000 3EAAAAAB x-
3F800000 00000000 7F800000 d-
00000000 00000000 7FC00000 v-
80000001 40000000 80000000 ux
";
        let got = run(STREAM).unwrap();
        assert_eq!(
            got,
            "\
3F800000 40400000 3EAAAAAB x-
3F800000 00000000 7F800000 d-
00000000 00000000 7FC00000 v-
80000001 40000000 80000000 ux
"
        );
    }

    #[test]
    fn test_lowercase_operands_echo_uppercase() {
        const STREAM: &str = "\
f 1 +
3f800000 40000000 40400000 xi
";
        let got = run(STREAM).unwrap();
        assert_eq!(got, "3F800000 40000000 40400000 xi\n");
    }

    #[test]
    fn test_mismatched_result_fails() {
        const STREAM: &str = "\
f 1 +
3F800000 40000000 40400001 xi
";
        let err = run(STREAM).unwrap_err();
        assert!(err.to_string().contains("got 40400000"), "{err}");
    }

    #[test]
    fn test_parse_errors() {
        let tests = [
            ("", "missing session header"),
            ("x 1 +\n0 0 0 --", "unknown format"),
            ("f 9 +\n0 0 0 --", "invalid rounding mode"),
            ("f 1 %\n0 0 0 --", "unknown operator"),
            ("f 1 +", "stream has no rows"),
            ("f 1 +\n3F800000 40000000 40400000", "row missing exception flags"),
            ("f 1 +\n3F800000 40000000 40400000 xi extra", "unexpected token"),
        ];
        for (i, (stream, want)) in tests.into_iter().enumerate() {
            let err = match parse(stream) {
                Err(err) => err,
                Ok(_) => panic!("#{i}: expected an error"),
            };
            assert!(err.to_string().contains(want), "#{i}: {err}");
        }
    }

    #[test]
    fn test_bad_operand_fails() {
        const STREAM: &str = "\
h 1 +
3C00 10000 3C00 --
";
        let err = run(STREAM).unwrap_err();
        assert!(err.to_string().contains("bad second operand"), "{err}");
    }
}
