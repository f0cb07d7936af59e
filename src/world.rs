use anyhow::{anyhow, bail, ensure, Context, Result};
use std::fs;
use std::str::FromStr;
use tracing::debug;

use crate::common::{Position, State};
use crate::map::{Cell, Map};

/// A loaded world description: the grid and where the search starts.
///
/// The text format is the column count and the row count, one per line,
/// followed by one line per grid row:
///
/// ```text
/// 3
/// 2
/// _#*
/// @__
/// ```
///
/// `_` is open floor, `#` a wall, `*` a dirty cell and `@` the agent, which
/// must appear exactly once. Rows may be longer than the column count; extra
/// characters are ignored.
#[derive(Debug, Clone)]
pub struct World {
    pub map: Map,
    pub start: State,
}

impl World {
    /// Reads a world file encoded as UTF-8 or UTF-16. UTF-16 without a
    /// byte-order mark is recognised from its leading ASCII digit.
    pub fn from_file(path: &str) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("failed to read world file {path}"))?;
        let text = decode(&bytes).with_context(|| format!("failed to decode world file {path}"))?;
        let world: World = text
            .parse()
            .with_context(|| format!("malformed world file {path}"))?;
        debug!(
            "loaded {path}: {}x{} grid, agent at {:?}, {} dirty cells",
            world.map.height,
            world.map.width,
            world.start.position,
            world.start.dirty.len()
        );
        Ok(world)
    }
}

impl FromStr for World {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let width = parse_dimension(lines.next(), "column")?;
        let height = parse_dimension(lines.next(), "row")?;

        let mut grid = Vec::with_capacity(height);
        let mut agent: Option<Position> = None;
        let mut dirty = Vec::new();

        for x in 0..height {
            let line = lines
                .next()
                .ok_or_else(|| anyhow!("expected {height} grid rows, found {x}"))?
                .trim();
            let row: Vec<char> = line.chars().collect();
            ensure!(
                row.len() >= width,
                "grid row {x} has {} cells, expected {width}",
                row.len()
            );

            let mut tiles_row = Vec::with_capacity(width);
            for (y, ch) in row.into_iter().take(width).enumerate() {
                let cell = match ch {
                    '_' => Cell::Open,
                    '#' => Cell::Wall,
                    '*' => {
                        dirty.push((x, y));
                        Cell::Open
                    }
                    '@' => {
                        if let Some(first) = agent.replace((x, y)) {
                            bail!("second agent at {:?}, first one at {first:?}", (x, y));
                        }
                        Cell::Open
                    }
                    other => bail!("unknown cell {other:?} at row {x}, column {y}"),
                };
                tiles_row.push(cell);
            }
            grid.push(tiles_row);
        }

        let position = agent.ok_or_else(|| anyhow!("world has no agent ('@')"))?;
        Ok(World {
            map: Map::new(grid)?,
            start: State::new(position, dirty),
        })
    }
}

fn parse_dimension(line: Option<&str>, name: &str) -> Result<usize> {
    let line = line.ok_or_else(|| anyhow!("missing {name} count"))?.trim();
    let value = line
        .parse::<usize>()
        .with_context(|| format!("invalid {name} count {line:?}"))?;
    ensure!(value > 0, "{name} count must be positive");
    Ok(value)
}

fn decode(bytes: &[u8]) -> Result<String> {
    match bytes {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        [0xEF, 0xBB, 0xBF, rest @ ..] => Ok(std::str::from_utf8(rest)?.to_owned()),
        // No byte-order mark: an ASCII first character still gives the byte
        // order away through its zero high byte.
        [first, 0, ..] if *first != 0 => decode_utf16(bytes, u16::from_le_bytes),
        [0, second, ..] if *second != 0 => decode_utf16(bytes, u16::from_be_bytes),
        _ => Ok(std::str::from_utf8(bytes)?.to_owned()),
    }
}

fn decode_utf16(bytes: &[u8], from_bytes: fn([u8; 2]) -> u16) -> Result<String> {
    ensure!(bytes.len() % 2 == 0, "UTF-16 input has an odd number of bytes");
    let units = bytes
        .chunks_exact(2)
        .map(|pair| from_bytes([pair[0], pair[1]]));
    Ok(char::decode_utf16(units).collect::<Result<String, _>>()?)
}
