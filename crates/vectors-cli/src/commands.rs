use anyhow::{Context, Result};
use clap::ArgMatches;
use std::fmt;
use std::str::FromStr;

use vectors::Vector;

use crate::config::{validate_tolerance, CliConfig};
use crate::parse::{parse_scalar, parse_vector};

/// Operations taking two vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Dot,
    Cross,
    Angle,
    ProjectOn,
    ProjectFrom,
    GramSchmidt,
    Distance,
}

/// Operations taking a single vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Length,
    Unit,
    IsUnit,
    Neg,
}

/// Operations taking a vector and a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarOp {
    Scale,
    Div,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 9] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Dot,
        BinaryOp::Cross,
        BinaryOp::Angle,
        BinaryOp::ProjectOn,
        BinaryOp::ProjectFrom,
        BinaryOp::GramSchmidt,
        BinaryOp::Distance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Dot => "dot",
            BinaryOp::Cross => "cross",
            BinaryOp::Angle => "angle",
            BinaryOp::ProjectOn => "project-on",
            BinaryOp::ProjectFrom => "project-from",
            BinaryOp::GramSchmidt => "gram-schmidt",
            BinaryOp::Distance => "distance",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            BinaryOp::Add => "Element-wise sum A + B",
            BinaryOp::Sub => "Element-wise difference A - B",
            BinaryOp::Dot => "Dot product A · B",
            BinaryOp::Cross => "Cross product A × B of two 3D vectors",
            BinaryOp::Angle => "Angle between A and B",
            BinaryOp::ProjectOn => "Projection of B onto the line spanned by A",
            BinaryOp::ProjectFrom => "Projection of A onto the line spanned by B",
            BinaryOp::GramSchmidt => "Unit component of B orthogonal to A",
            BinaryOp::Distance => "Euclidean distance between A and B",
        }
    }

    pub fn apply(&self, a: &Vector, b: &Vector, config: &CliConfig) -> Result<Outcome> {
        let outcome = match self {
            BinaryOp::Add => Outcome::Vector((a + b)?),
            BinaryOp::Sub => Outcome::Vector((a - b)?),
            BinaryOp::Dot => Outcome::Scalar(a.dot(b)?),
            BinaryOp::Cross => Outcome::Vector(a.cross(b)?),
            BinaryOp::Angle => Outcome::Scalar(config.angle_unit.convert(a.angle(b)?)),
            BinaryOp::ProjectOn => Outcome::Vector(a.project_on(b)?),
            BinaryOp::ProjectFrom => Outcome::Vector(a.project_from(b)?),
            BinaryOp::GramSchmidt => Outcome::Vector(a.gram_schmidt(b)?),
            BinaryOp::Distance => Outcome::Scalar(a.distance(b)?),
        };
        Ok(outcome)
    }
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 4] = [UnaryOp::Length, UnaryOp::Unit, UnaryOp::IsUnit, UnaryOp::Neg];

    pub fn name(&self) -> &'static str {
        match self {
            UnaryOp::Length => "length",
            UnaryOp::Unit => "unit",
            UnaryOp::IsUnit => "is-unit",
            UnaryOp::Neg => "neg",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            UnaryOp::Length => "Euclidean norm of A",
            UnaryOp::Unit => "A scaled to length one",
            UnaryOp::IsUnit => "Whether A has length exactly one",
            UnaryOp::Neg => "A with every sign flipped",
        }
    }

    pub fn apply(&self, a: &Vector) -> Result<Outcome> {
        let outcome = match self {
            UnaryOp::Length => Outcome::Scalar(a.length()),
            UnaryOp::Unit => Outcome::Vector(a.unit()?),
            UnaryOp::IsUnit => Outcome::Flag(a.is_unit()),
            UnaryOp::Neg => Outcome::Vector(-a),
        };
        Ok(outcome)
    }
}

impl ScalarOp {
    pub const ALL: [ScalarOp; 2] = [ScalarOp::Scale, ScalarOp::Div];

    pub fn name(&self) -> &'static str {
        match self {
            ScalarOp::Scale => "scale",
            ScalarOp::Div => "div",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            ScalarOp::Scale => "A multiplied by SCALAR",
            ScalarOp::Div => "A divided by SCALAR",
        }
    }

    pub fn apply(&self, a: &Vector, scalar: f64) -> Result<Outcome> {
        let outcome = match self {
            ScalarOp::Scale => Outcome::Vector(a * scalar),
            ScalarOp::Div => Outcome::Vector((a / scalar)?),
        };
        Ok(outcome)
    }
}

macro_rules! from_name {
    ($ty:ident, $what:literal) => {
        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|op| op.name() == s)
                    .ok_or_else(|| format!("Unknown {} operation: {}", $what, s))
            }
        }
    };
}

from_name!(BinaryOp, "binary");
from_name!(UnaryOp, "unary");
from_name!(ScalarOp, "scalar");

/// Result of running one subcommand.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Vector(Vector),
    Scalar(f64),
    Flag(bool),
    Lines(Vec<Vector>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Vector(v) => write!(f, "{}", v),
            Outcome::Scalar(s) => write!(f, "{}", s),
            Outcome::Flag(b) => write!(f, "{}", b),
            Outcome::Lines(vs) => {
                for (idx, v) in vs.iter().enumerate() {
                    if idx > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", v)?;
                }
                Ok(())
            }
        }
    }
}

/// The sample vectors printed by `vectors-cli demo`.
pub fn demo() -> Vec<Vector> {
    vec![
        Vector::from([1.0, 2.0, 3.0]),
        Vector::from_values([1, 3, 4]),
        Vector::from_values(vec![0.0, 9.0, 0.0]),
    ]
}

/// Compare two vectors exactly, or within `tolerance` when it is positive.
pub fn equals(a: &Vector, b: &Vector, tolerance: f64) -> Outcome {
    if tolerance > 0.0 {
        Outcome::Flag(a.approx_eq(b, tolerance))
    } else {
        Outcome::Flag(a == b)
    }
}

fn vector_arg(matches: &ArgMatches, name: &str) -> Result<Vector> {
    let raw = matches
        .get_one::<String>(name)
        .with_context(|| format!("Missing argument <{}>", name.to_uppercase()))?;
    parse_vector(raw)
}

/// Dispatch a parsed subcommand.
pub fn run(name: &str, matches: &ArgMatches, config: &CliConfig) -> Result<Outcome> {
    if name == "demo" {
        return Ok(Outcome::Lines(demo()));
    }

    if name == "equals" {
        let a = vector_arg(matches, "a")?;
        let b = vector_arg(matches, "b")?;
        let tolerance = match matches.get_one::<String>("tolerance") {
            Some(raw) => validate_tolerance(parse_scalar(raw)?)?,
            None => config.tolerance,
        };
        return Ok(equals(&a, &b, tolerance));
    }

    if let Ok(op) = name.parse::<BinaryOp>() {
        let a = vector_arg(matches, "a")?;
        let b = vector_arg(matches, "b")?;
        log::debug!("{} {} {}", op.name(), a, b);
        return op
            .apply(&a, &b, config)
            .with_context(|| format!("'{}' failed", op.name()));
    }

    if let Ok(op) = name.parse::<UnaryOp>() {
        let a = vector_arg(matches, "a")?;
        log::debug!("{} {}", op.name(), a);
        return op.apply(&a).with_context(|| format!("'{}' failed", op.name()));
    }

    if let Ok(op) = name.parse::<ScalarOp>() {
        let a = vector_arg(matches, "a")?;
        let raw = matches
            .get_one::<String>("scalar")
            .context("Missing argument <SCALAR>")?;
        let scalar = parse_scalar(raw)?;
        log::debug!("{} {} {}", op.name(), a, scalar);
        return op
            .apply(&a, scalar)
            .with_context(|| format!("'{}' failed", op.name()));
    }

    anyhow::bail!("Unknown subcommand: {}", name)
}
