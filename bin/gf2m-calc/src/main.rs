use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use colored::Colorize;
use gf2m_math::GaloisField;
use log::info;

#[derive(Parser)]
#[command(about = "Arithmetic over GF(2^m)")]
struct Cli {
    #[arg(long, short = 'm', default_value_t = 4)] degree: u32,
    /// Primitive polynomial (defaults to the catalogue entry for the degree)
    #[arg(long, value_parser = parse_num)] poly: Option<u32>,
    /// Reject polynomials that do not generate the full group
    #[arg(long)] checked: bool,
    #[command(subcommand)] op: Op,
}

#[derive(Subcommand)]
enum Op {
    Add { #[arg(value_parser = parse_num)] a: u32, #[arg(value_parser = parse_num)] b: u32 },
    Sub { #[arg(value_parser = parse_num)] a: u32, #[arg(value_parser = parse_num)] b: u32 },
    Mul { #[arg(value_parser = parse_num)] a: u32, #[arg(value_parser = parse_num)] b: u32 },
    Div { #[arg(value_parser = parse_num)] a: u32, #[arg(value_parser = parse_num)] b: u32 },
    Inv { #[arg(value_parser = parse_num)] a: u32 },
    Pow {
        #[arg(value_parser = parse_num)] a: u32,
        #[arg(allow_negative_numbers = true)] n: i64,
    },
    Log { #[arg(value_parser = parse_num)] a: u32 },
    /// Walk through a, b, a+b, a*b, a/b and inv(a)
    Demo {
        #[arg(value_parser = parse_num, default_value = "0b1011")] a: u32,
        #[arg(value_parser = parse_num, default_value = "0b1101")] b: u32,
    },
    /// Dump the exponent and log tables
    Tables,
}

/// Accepts decimal, `0x` hex and `0b` binary.
fn parse_num(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let (digits, radix) = if let Some(h) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (h, 16)
    } else if let Some(b) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        (b, 2)
    } else {
        (s, 10)
    };
    u32::from_str_radix(&digits.replace('_', ""), radix).map_err(|e| format!("{}: {}", s, e))
}

fn bits(gf: &GaloisField, v: u32) -> String {
    format!("{:0width$b}", v, width = gf.degree() as usize)
}

fn element(gf: &GaloisField, v: u32) -> anyhow::Result<u32> {
    if !gf.contains(v) {
        bail!("{} is not an element of {}", v, gf);
    }
    Ok(v)
}

fn show(gf: &GaloisField, label: &str, v: u32) {
    println!("{:>12} = {} ({})", label, bits(gf, v).green(), v);
}

/// Row `i` of the table dump: `i | g^i` on the left, `a | log(a)` for
/// `a = i + 1` on the right.
fn table_row(gf: &GaloisField, i: u32) -> String {
    let a = i + 1;
    let log = gf.log(a).map_or_else(|| "-".to_string(), |l| l.to_string());
    format!("{:>8} {:>8} | {:>8} {:>8}", i, gf.exp(i as u64), a, log)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let poly = match cli.poly {
        Some(p) => p,
        None => gf2m_core::primitive_poly(cli.degree)
            .with_context(|| format!("pass --poly for degree {}", cli.degree))?,
    };
    let gf = if cli.checked {
        GaloisField::new_checked(poly, cli.degree)?
    } else {
        GaloisField::new(poly, cli.degree)?
    };
    info!("Field ready: {} ({} elements)", gf, gf.field_size());

    match cli.op {
        Op::Add { a, b } => show(&gf, "a + b", gf.add(element(&gf, a)?, element(&gf, b)?)),
        Op::Sub { a, b } => show(&gf, "a - b", gf.subtract(element(&gf, a)?, element(&gf, b)?)),
        Op::Mul { a, b } => show(&gf, "a * b", gf.multiply(element(&gf, a)?, element(&gf, b)?)),
        Op::Div { a, b } => show(&gf, "a / b", gf.divide(element(&gf, a)?, element(&gf, b)?)?),
        Op::Inv { a } => show(&gf, "inverse(a)", gf.inverse(element(&gf, a)?)?),
        Op::Pow { a, n } => show(&gf, "a ^ n", gf.pow(element(&gf, a)?, n)?),
        Op::Log { a } => match gf.log(element(&gf, a)?) {
            Some(l) => println!("{:>12} = {}", "log(a)", l.to_string().green()),
            None => bail!("zero has no discrete logarithm"),
        },
        Op::Demo { a, b } => {
            let (a, b) = (element(&gf, a)?, element(&gf, b)?);
            println!("{}", format!("Field: {}", gf).bold());
            show(&gf, "a", a);
            show(&gf, "b", b);
            show(&gf, "a + b", gf.add(a, b));
            show(&gf, "a * b", gf.multiply(a, b));
            show(&gf, "a / b", gf.divide(a, b)?);
            show(&gf, "inverse(a)", gf.inverse(a)?);
        }
        Op::Tables => {
            println!("{}", format!("{:>8} {:>8} | {:>8} {:>8}", "i", "g^i", "a", "log(a)").bold());
            for i in 0..gf.order() {
                println!("{}", table_row(&gf, i));
            }
        }
    }
    Ok(())
}
