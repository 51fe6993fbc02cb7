use crate::*;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;

/// Frozen HMM parameters.
///
/// Constructed once, validated once, never re-estimated. Every accessor hands
/// out shared references, so nothing downstream can mutate a distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Unchecked")]
pub struct Parameters {
    initial: [Probability; STATES],
    transition: [[Probability; STATES]; STATES],
    emission: [[Probability; MOVES]; STATES],
}

/// Wire shape of a parameter file before validation.
#[derive(Deserialize)]
struct Unchecked {
    initial: [Probability; STATES],
    transition: [[Probability; STATES]; STATES],
    emission: [[Probability; MOVES]; STATES],
}

impl TryFrom<Unchecked> for Parameters {
    type Error = Error;
    fn try_from(raw: Unchecked) -> Result<Self, Self::Error> {
        Self::new(raw.initial, raw.transition, raw.emission)
    }
}

impl Parameters {
    /// Validate and freeze a parameter triple.
    pub fn new(
        initial: [Probability; STATES],
        transition: [[Probability; STATES]; STATES],
        emission: [[Probability; MOVES]; STATES],
    ) -> Result<Self, Error> {
        Self::check("initial", &initial)?;
        for (i, row) in transition.iter().enumerate() {
            Self::check(&format!("transition[{}]", i), row)?;
        }
        for (i, row) in emission.iter().enumerate() {
            Self::check(&format!("emission[{}]", i), row)?;
        }
        Ok(Self {
            initial,
            transition,
            emission,
        })
    }

    /// Load and validate parameters from a JSON file with keys
    /// `initial`, `transition`, `emission`.
    pub fn from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read parameters from {}", path.display()))?;
        let params = serde_json::from_str::<Self>(&text)
            .with_context(|| format!("parse parameters from {}", path.display()))?;
        log::info!("loaded parameters from {}", path.display());
        Ok(params)
    }

    pub fn initial(&self) -> &[Probability; STATES] {
        &self.initial
    }
    pub fn transition(&self) -> &[[Probability; STATES]; STATES] {
        &self.transition
    }
    pub fn emission(&self) -> &[[Probability; MOVES]; STATES] {
        &self.emission
    }

    /// Distribution over the next move given the current hidden state:
    /// `transition[state] · emission`.
    pub fn project(&self, state: State) -> [Probability; MOVES] {
        let mut moves = [0.; MOVES];
        for (next, p) in self.transition[state].iter().enumerate() {
            for (code, e) in self.emission[next].iter().enumerate() {
                moves[code] += p * e;
            }
        }
        moves
    }

    fn check(name: &str, dist: &[Probability]) -> Result<(), Error> {
        if let Some(p) = dist.iter().find(|p| !p.is_finite() || **p < 0.) {
            return Err(Error::Misconfigured(format!(
                "{} has entry {} outside [0, 1]",
                name, p
            )));
        }
        let sum = dist.iter().sum::<Probability>();
        if (sum - 1.).abs() > STOCHASTIC_TOLERANCE {
            return Err(Error::Misconfigured(format!(
                "{} sums to {}, expected 1",
                name, sum
            )));
        }
        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            initial: DEFAULT_INITIAL,
            transition: DEFAULT_TRANSITION,
            emission: DEFAULT_EMISSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &Parameters, b: &Parameters) -> bool {
        let flat = |p: &Parameters| {
            p.initial()
                .iter()
                .chain(p.transition().iter().flatten())
                .chain(p.emission().iter().flatten())
                .copied()
                .collect::<Vec<_>>()
        };
        flat(a).iter().zip(flat(b).iter()).all(|(x, y)| (x - y).abs() < 1e-12)
    }

    #[test]
    fn defaults_are_valid() {
        let defaults = Parameters::default();
        let checked = Parameters::new(DEFAULT_INITIAL, DEFAULT_TRANSITION, DEFAULT_EMISSION);
        assert_eq!(checked, Ok(defaults));
    }

    #[test]
    fn rejects_unnormalized_row() {
        let mut transition = DEFAULT_TRANSITION;
        transition[1] = [0.5, 0.5, 0.5];
        let result = Parameters::new(DEFAULT_INITIAL, transition, DEFAULT_EMISSION);
        assert!(matches!(result, Err(Error::Misconfigured(s)) if s.contains("transition[1]")));
    }

    #[test]
    fn rejects_negative_entry() {
        let mut emission = DEFAULT_EMISSION;
        emission[2] = [-0.1, 0.4, 0.7];
        let result = Parameters::new(DEFAULT_INITIAL, DEFAULT_TRANSITION, emission);
        assert!(matches!(result, Err(Error::Misconfigured(s)) if s.contains("emission[2]")));
    }

    #[test]
    fn rejects_nan() {
        let initial = [Probability::NAN, 0.5, 0.5];
        let result = Parameters::new(initial, DEFAULT_TRANSITION, DEFAULT_EMISSION);
        assert!(matches!(result, Err(Error::Misconfigured(_))));
    }

    #[test]
    fn tolerates_rounding() {
        let initial = [0.333333, 0.333333, 0.333334];
        assert!(Parameters::new(initial, DEFAULT_TRANSITION, DEFAULT_EMISSION).is_ok());
    }

    #[test]
    fn projection_is_stochastic() {
        let params = Parameters::default();
        for state in 0..STATES {
            let moves = params.project(state);
            assert!((moves.iter().sum::<Probability>() - 1.).abs() < 1e-9);
        }
        let rock = params.project(0);
        assert!((rock[0] - 0.59).abs() < 1e-9);
        assert!((rock[1] - 0.205).abs() < 1e-9);
        assert!((rock[2] - 0.205).abs() < 1e-9);
    }

    #[test]
    fn parses_json() {
        let json = r#"{
            "initial": [1.0, 0.0, 0.0],
            "transition": [[0.9, 0.05, 0.05], [0.05, 0.9, 0.05], [0.05, 0.05, 0.9]],
            "emission": [[0.6, 0.2, 0.2], [0.2, 0.6, 0.2], [0.2, 0.2, 0.6]]
        }"#;
        let params = serde_json::from_str::<Parameters>(json).unwrap();
        assert_eq!(params.initial(), &[1.0, 0.0, 0.0]);
        assert_eq!(params.emission()[1], [0.2, 0.6, 0.2]);
    }

    #[test]
    fn json_goes_through_validation() {
        let json = r#"{
            "initial": [0.5, 0.5, 0.5],
            "transition": [[0.9, 0.05, 0.05], [0.05, 0.9, 0.05], [0.05, 0.05, 0.9]],
            "emission": [[0.6, 0.2, 0.2], [0.2, 0.6, 0.2], [0.2, 0.2, 0.6]]
        }"#;
        let error = serde_json::from_str::<Parameters>(json).unwrap_err();
        assert!(error.to_string().contains("initial"));
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("roshambo-params-{}.json", std::process::id()));
        std::fs::write(&path, serde_json::to_string(&Parameters::default()).unwrap()).unwrap();
        let loaded = Parameters::from_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(close(&loaded.unwrap(), &Parameters::default()));
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/params.json");
        let loaded = Parameters::from_file(&path).unwrap();
        assert!(close(&loaded, &Parameters::default()));
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::path::Path::new("/nonexistent/roshambo/params.json");
        assert!(Parameters::from_file(path).is_err());
    }
}
