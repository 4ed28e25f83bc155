use crate::error::{ChromaShiftError, ChromaShiftResult};

/// A signed 2D displacement applied to one channel's sample point.
///
/// Either component may be negative, zero, or positive, with no bound on
/// magnitude: sample coordinates are clamped to the buffer at use site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Offset2D {
    /// Displacement along x (positive = rightward).
    pub dx: i32,
    /// Displacement along y (positive = downward).
    pub dy: i32,
}

impl Offset2D {
    /// The zero displacement.
    pub const ZERO: Self = Self::new(0, 0);

    /// Build an offset from both components.
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Horizontal-only displacement (`dy = 0`), the scalar parameter form.
    pub const fn horizontal(dx: i32) -> Self {
        Self::new(dx, 0)
    }
}

/// Per-channel displacement vectors, ordered red/green/blue.
///
/// The named fields are the array-of-three contract made type-level: there
/// are always exactly three offsets and their channel assignment cannot be
/// permuted by accident. `From<[Offset2D; 3]>` keeps the array form usable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChannelOffsets {
    /// Displacement of the red sample point.
    pub red: Offset2D,
    /// Displacement of the green sample point.
    pub green: Offset2D,
    /// Displacement of the blue sample point.
    pub blue: Offset2D,
}

impl ChannelOffsets {
    /// Build offsets for all three channels.
    pub const fn new(red: Offset2D, green: Offset2D, blue: Offset2D) -> Self {
        Self { red, green, blue }
    }

    /// Parse offsets from a JSON parameter object.
    ///
    /// Accepts optional `red`, `green` and `blue` keys; each value is either
    /// a bare integer (meaning `[dx, 0]`) or a two-element `[dx, dy]` array.
    /// Missing keys mean no displacement for that channel.
    ///
    /// ```
    /// # use chromashift::{ChannelOffsets, Offset2D};
    /// let offsets =
    ///     ChannelOffsets::from_params(&serde_json::json!({ "red": 2, "blue": [-2, 1] })).unwrap();
    /// assert_eq!(offsets.red, Offset2D::horizontal(2));
    /// assert_eq!(offsets.green, Offset2D::ZERO);
    /// assert_eq!(offsets.blue, Offset2D::new(-2, 1));
    /// ```
    pub fn from_params(params: &serde_json::Value) -> ChromaShiftResult<Self> {
        let Some(obj) = params.as_object() else {
            return Err(ChromaShiftError::validation(
                "offset params must be an object",
            ));
        };

        let mut out = Self::default();
        for (key, value) in obj {
            let offset = parse_offset(key, value)?;
            match key.as_str() {
                "red" => out.red = offset,
                "green" => out.green = offset,
                "blue" => out.blue = offset,
                other => {
                    return Err(ChromaShiftError::validation(format!(
                        "unknown offset param '{other}'"
                    )));
                }
            }
        }
        Ok(out)
    }
}

impl From<[Offset2D; 3]> for ChannelOffsets {
    fn from([red, green, blue]: [Offset2D; 3]) -> Self {
        Self { red, green, blue }
    }
}

fn parse_offset(key: &str, value: &serde_json::Value) -> ChromaShiftResult<Offset2D> {
    if let Some(n) = value.as_i64() {
        return Ok(Offset2D::horizontal(component(key, n)?));
    }

    let Some(arr) = value.as_array() else {
        return Err(ChromaShiftError::validation(format!(
            "offset param '{key}' must be an integer or a [dx, dy] array"
        )));
    };
    if arr.len() != 2 {
        return Err(ChromaShiftError::validation(format!(
            "offset param '{key}' must have exactly two components"
        )));
    }

    let dx = arr[0].as_i64().ok_or_else(|| {
        ChromaShiftError::validation(format!("offset param '{key}' dx must be an integer"))
    })?;
    let dy = arr[1].as_i64().ok_or_else(|| {
        ChromaShiftError::validation(format!("offset param '{key}' dy must be an integer"))
    })?;
    Ok(Offset2D::new(component(key, dx)?, component(key, dy)?))
}

fn component(key: &str, n: i64) -> ChromaShiftResult<i32> {
    i32::try_from(n).map_err(|_| {
        ChromaShiftError::validation(format!("offset param '{key}' is out of range"))
    })
}
