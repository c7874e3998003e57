use crate::Mass;

/// One weighted point parsed from a line of whitespace-separated text:
/// `[key] mass x1 x2 .. xd`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub key: Option<String>,
    pub mass: Mass,
    pub point: Vec<f64>,
}

impl Record {
    /// Parse a line, reading a leading key column when `keyed`.
    pub fn parse(line: &str, keyed: bool) -> anyhow::Result<Self> {
        let mut fields = line.split_whitespace();
        let key = match keyed {
            true => Some(
                fields
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("missing key"))?
                    .to_string(),
            ),
            false => None,
        };
        let mass = fields
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing mass"))?
            .parse::<Mass>()
            .map_err(|e| anyhow::anyhow!("invalid mass: {}", e))?;
        let point = fields
            .map(|x| x.parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("invalid coordinate: {}", e))?;
        if point.is_empty() {
            return Err(anyhow::anyhow!("missing coordinates"));
        }
        Ok(Self { key, mass, point })
    }
}
