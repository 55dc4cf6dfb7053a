//! Validation of externally supplied coefficient arrays.

use tracing::warn;
use zq::{NttPoly, Poly, RingError, N};

use crate::errors::{Component, Error};

pub(crate) fn check_length(which: Component, actual: usize) -> Result<(), Error> {
    if actual != N {
        warn!(%which, expected = N, actual, "rejected coefficient array length");
        return Err(Error::InvalidLength {
            which,
            expected: N,
            actual,
        });
    }
    Ok(())
}

fn out_of_range(which: Component, index: usize, value: i64) -> Error {
    warn!(%which, index, value, "rejected out-of-range coefficient");
    Error::OutOfRangeCoefficient {
        which,
        index,
        value,
    }
}

fn rejected(which: Component, err: RingError) -> Error {
    match err {
        RingError::OutOfRangeCoefficient { index, value } => out_of_range(which, index, value),
        other => Error::from_ring(which, other),
    }
}

/// Narrows every value to `T`, rejecting the first that does not fit.
fn narrow<C, T>(which: Component, coeffs: &[C]) -> Result<Vec<T>, Error>
where
    C: Copy + Into<i64>,
    T: TryFrom<i64>,
{
    coeffs
        .iter()
        .enumerate()
        .map(|(index, &c)| {
            let value: i64 = c.into();
            T::try_from(value).map_err(|_| out_of_range(which, index, value))
        })
        .collect()
}

/// Reads a spatial-domain array. Coefficients must lie in `(-q, q)`.
pub(crate) fn spatial<C: Copy + Into<i64>>(which: Component, coeffs: &[C]) -> Result<Poly, Error> {
    check_length(which, coeffs.len())?;
    let narrowed: Vec<i16> = narrow(which, coeffs)?;
    Poly::from_coeffs(&narrowed).map_err(|err| rejected(which, err))
}

/// Reads a transform-domain array. Coefficients must be canonical, in `[0, q)`.
pub(crate) fn transform(which: Component, coeffs: &[i64]) -> Result<NttPoly, Error> {
    check_length(which, coeffs.len())?;
    let narrowed: Vec<u16> = narrow(which, coeffs)?;
    NttPoly::from_coeffs(&narrowed).map_err(|err| rejected(which, err))
}

/// Parses a coefficient list typed or pasted by a user.
///
/// Accepts either a JSON array (`[1, -2, 3]`) or bare comma-separated integers
/// (`1, -2, 3`). Surrounding whitespace is ignored. Every value must fit in an `i16`;
/// the length is not checked here.
pub fn parse_coefficient_list(which: Component, text: &str) -> Result<Vec<i16>, Error> {
    let malformed = |reason: String| Error::MalformedCoefficientList { which, reason };

    let trimmed = text.trim();
    let values: Vec<i64> = if trimmed.starts_with('[') && trimmed.ends_with(']') {
        serde_json::from_str(trimmed).map_err(|err| malformed(err.to_string()))?
    } else {
        if trimmed.is_empty() {
            return Err(malformed("empty input".to_owned()));
        }
        trimmed
            .split(',')
            .enumerate()
            .map(|(index, token)| {
                let token = token.trim();
                token
                    .parse::<i64>()
                    .map_err(|_| malformed(format!("{token:?} at index {index} is not an integer")))
            })
            .collect::<Result<_, _>>()?
    };

    values
        .iter()
        .enumerate()
        .map(|(index, &value)| i16::try_from(value).map_err(|_| out_of_range(which, index, value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_and_csv_agree() {
        let json = parse_coefficient_list(Component::S1, "[1, -2, 3]").unwrap();
        let csv = parse_coefficient_list(Component::S1, " 1, -2 ,3 ").unwrap();
        assert_eq!(json, vec![1, -2, 3]);
        assert_eq!(json, csv);
        assert_eq!(parse_coefficient_list(Component::H, "[]").unwrap(), Vec::<i16>::new());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "1,,2", "1, x", "[1, 2", "[1, \"2\"]", "1.5"] {
            assert!(
                matches!(
                    parse_coefficient_list(Component::H2p, bad),
                    Err(Error::MalformedCoefficientList {
                        which: Component::H2p,
                        ..
                    })
                ),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_values_beyond_i16() {
        assert_eq!(
            parse_coefficient_list(Component::H, "1, 40000"),
            Err(Error::OutOfRangeCoefficient {
                which: Component::H,
                index: 1,
                value: 40000
            })
        );
    }

    #[test]
    fn test_spatial_bounds() {
        let mut c = vec![0i64; N];
        c[0] = 12288;
        c[1] = -12288;
        let p = spatial(Component::S1, &c).unwrap();
        assert_eq!(p.coeffs()[0], -1);
        assert_eq!(p.coeffs()[1], 1);

        c[2] = 12289;
        assert_eq!(
            spatial(Component::S1, &c),
            Err(Error::OutOfRangeCoefficient {
                which: Component::S1,
                index: 2,
                value: 12289
            })
        );

        // Beyond i16 is caught while narrowing, with the same error.
        c[2] = 0;
        c[8] = -70_000;
        assert_eq!(
            spatial(Component::H, &c),
            Err(Error::OutOfRangeCoefficient {
                which: Component::H,
                index: 8,
                value: -70_000
            })
        );
    }

    #[test]
    fn test_transform_requires_canonical() {
        let mut c = vec![1i64; N];
        c[5] = -1;
        assert_eq!(
            transform(Component::HHat, &c),
            Err(Error::OutOfRangeCoefficient {
                which: Component::HHat,
                index: 5,
                value: -1
            })
        );

        c[5] = 1;
        c[6] = 12289;
        assert_eq!(
            transform(Component::H2pD, &c),
            Err(Error::OutOfRangeCoefficient {
                which: Component::H2pD,
                index: 6,
                value: 12289
            })
        );
    }
}
