//! The generation engine: offspring production, selection, and the outer
//! evolution loop.

use rayon::prelude::*;

use crate::schema::{EvolutionConfig, EvolutionStats, GenerationReport};

use super::candidate::Candidate;
use super::fitness::mismatch_count;
use super::mutation::PhraseRng;
use super::select::select;

/// Errors that can end an evolution run without a result.
#[derive(Debug, thiserror::Error)]
pub enum EvolveError {
    /// The target never appeared within `limit` generations. Guaranteed
    /// for targets containing characters the mutation alphabet cannot
    /// produce.
    #[error("Generation cap {limit} exceeded before the target phrase appeared")]
    IterationLimitExceeded { limit: usize },
}

/// Successful result of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    /// Best candidate of the final generation, i.e. the first element of
    /// the selection ordering.
    pub best: Candidate,
    /// Generations completed when the target appeared.
    pub generations: usize,
    /// Statistics from the run.
    pub stats: EvolutionStats,
}

/// Evolution engine that drives a single run.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    target: String,
    rng: PhraseRng,
    generation: Vec<Candidate>,
    generations: usize,
    offspring_evaluated: u64,
}

impl EvolutionEngine {
    /// Create a new engine for `target`.
    ///
    /// The target is lowercased before evolution starts. With
    /// `config.random_seed` set, a fresh engine replays the exact same
    /// run every time.
    pub fn new(target: &str, config: EvolutionConfig) -> Self {
        let seed = config.random_seed.unwrap_or_else(rand::random);
        log::debug!("evolution rng seed: {}", seed);

        Self {
            config,
            target: target.to_lowercase(),
            rng: PhraseRng::new(seed),
            generation: Vec::new(),
            generations: 0,
            offspring_evaluated: 0,
        }
    }

    /// The normalized target phrase.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Seed generation zero: a single candidate with a uniformly random
    /// text of the target's length and no ancestry.
    pub fn initialize(&mut self) {
        let length = self.target.chars().count();
        let seed = Candidate::seed(self.rng.random_phrase(length));
        log::debug!("generation 0 seeded with {:?}", seed.text);

        self.generation = vec![seed];
        self.generations = 0;
        self.offspring_evaluated = 0;
    }

    /// Run one generation step: every survivor produces
    /// `offspring_per_parent` offspring, and selection keeps the best
    /// `survival_size` of the combined pool. Parents do not re-enter the
    /// pool, so nothing survives unmutated.
    pub fn advance(&mut self) {
        let offspring_per_parent = self.config.offspring_per_parent;
        let history_limit = self.config.history_limit;

        // One RNG per parent, seeded before the parallel section, keeps
        // fixed-seed runs reproducible under any thread schedule.
        let seeds: Vec<u64> = (0..self.generation.len())
            .map(|_| self.rng.next_seed())
            .collect();

        let pool: Vec<Candidate> = self
            .generation
            .par_iter()
            .zip(seeds.into_par_iter())
            .flat_map_iter(|(parent, seed)| {
                let mut rng = PhraseRng::new(seed);
                (0..offspring_per_parent).map(move |_| rng.mutate(parent, history_limit))
            })
            .collect();

        self.offspring_evaluated += pool.len() as u64;
        self.generation = select(pool, &self.target, self.config.survival_size);
        self.generations += 1;
    }

    /// Whether the target text is present in the current generation.
    ///
    /// Presence is a membership test by exact text equality, not a score
    /// threshold.
    fn target_reached(&self) -> bool {
        self.generation.iter().any(|c| c.matches(&self.target))
    }

    /// Build the observation for the generation just completed.
    fn report(&self, pool_size: usize) -> GenerationReport {
        let best = &self.generation[0];
        let total: usize = self
            .generation
            .iter()
            .map(|c| mismatch_count(&c.text, &self.target))
            .sum();

        GenerationReport {
            generation: self.generations,
            pool_size,
            best_text: best.text.clone(),
            best_mismatch: mismatch_count(&best.text, &self.target),
            avg_mismatch: total as f32 / self.generation.len() as f32,
        }
    }

    /// Run evolution to completion, passing every generation's report to
    /// `observe`.
    ///
    /// The observer runs once per completed generation, the converging one
    /// included, and sees the run as a forward-only stream. Generation
    /// zero is never tested for convergence, so at least one step always
    /// runs. Returns the best candidate and the generation count once the
    /// target appears, or [`EvolveError::IterationLimitExceeded`] after
    /// `max_generations` steps without it; no partial result survives a
    /// failed run.
    pub fn run_with_observer<F>(&mut self, mut observe: F) -> Result<EvolutionOutcome, EvolveError>
    where
        F: FnMut(&GenerationReport),
    {
        let start_time = std::time::Instant::now();
        self.initialize();

        loop {
            let pool_size = self.generation.len() * self.config.offspring_per_parent;
            self.advance();
            observe(&self.report(pool_size));

            if self.target_reached() {
                break;
            }
            if self.generations >= self.config.max_generations {
                return Err(EvolveError::IterationLimitExceeded {
                    limit: self.config.max_generations,
                });
            }
        }

        let elapsed = start_time.elapsed().as_secs_f64();
        log::info!(
            "target reproduced after {} generations ({} offspring evaluated)",
            self.generations,
            self.offspring_evaluated
        );

        Ok(EvolutionOutcome {
            best: self.generation[0].clone(),
            generations: self.generations,
            stats: EvolutionStats {
                offspring_evaluated: self.offspring_evaluated,
                elapsed_seconds: elapsed,
                offspring_per_second: self.offspring_evaluated as f64 / elapsed,
            },
        })
    }

    /// Run evolution without observation.
    pub fn run(&mut self) -> Result<EvolutionOutcome, EvolveError> {
        self.run_with_observer(|_| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config(seed: u64) -> EvolutionConfig {
        EvolutionConfig {
            random_seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_initialize_seeds_single_candidate() {
        let mut engine = EvolutionEngine::new("hello world", seeded_config(42));
        engine.initialize();

        assert_eq!(engine.generation.len(), 1);
        assert_eq!(engine.generation[0].text.chars().count(), 11);
        assert!(engine.generation[0].history.is_empty());
        assert_eq!(engine.generations, 0);
    }

    #[test]
    fn test_target_is_lowercased() {
        let engine = EvolutionEngine::new("Hello World", EvolutionConfig::default());
        assert_eq!(engine.target(), "hello world");
    }

    #[test]
    fn test_advance_grows_then_caps_population() {
        let mut engine = EvolutionEngine::new("evolve", seeded_config(1));
        engine.initialize();

        // 1 parent * 100 offspring, trimmed to 10 survivors.
        engine.advance();
        assert_eq!(engine.generation.len(), 10);

        // 10 parents * 100 offspring, trimmed to 10 again.
        engine.advance();
        assert_eq!(engine.generation.len(), 10);
        assert_eq!(engine.offspring_evaluated, 1100);
    }

    #[test]
    fn test_length_invariant_across_generations() {
        let mut engine = EvolutionEngine::new("genetic drift", seeded_config(9));
        engine.initialize();

        for _ in 0..3 {
            engine.advance();
            assert!(
                engine
                    .generation
                    .iter()
                    .all(|c| c.text.chars().count() == 13)
            );
        }
    }

    #[test]
    fn test_converges_on_short_target() {
        let mut engine = EvolutionEngine::new("hi", seeded_config(42));
        let outcome = engine.run().expect("short in-alphabet target must converge");

        assert_eq!(outcome.best.text, "hi");
        assert!(outcome.generations >= 1);
        assert!(outcome.generations <= 2000);
        assert_eq!(
            outcome.stats.offspring_evaluated,
            100 + (outcome.generations as u64 - 1) * 1000
        );
    }

    #[test]
    fn test_out_of_alphabet_target_hits_cap() {
        let config = EvolutionConfig {
            max_generations: 50,
            random_seed: Some(11),
            ..Default::default()
        };
        let mut engine = EvolutionEngine::new("hi!", config);

        let err = engine.run().unwrap_err();
        assert!(matches!(
            err,
            EvolveError::IterationLimitExceeded { limit: 50 }
        ));
    }

    #[test]
    fn test_case_normalization_is_transparent() {
        let a = EvolutionEngine::new("Hi", seeded_config(7))
            .run()
            .expect("must converge");
        let b = EvolutionEngine::new("hi", seeded_config(7))
            .run()
            .expect("must converge");

        assert_eq!(a.generations, b.generations);
        assert_eq!(a.best.text, b.best.text);
    }

    #[test]
    fn test_fixed_seed_reproduces_report_stream() {
        let run = |seed| {
            let mut lines = Vec::new();
            let outcome = EvolutionEngine::new("echo", seeded_config(seed))
                .run_with_observer(|r| lines.push(format!("{} {}", r.generation, r.best_text)))
                .expect("must converge");
            (outcome.generations, lines)
        };

        assert_eq!(run(5), run(5));
    }

    #[test]
    fn test_reports_track_pool_sizes() {
        let mut reports = Vec::new();
        let outcome = EvolutionEngine::new("selection pressure", seeded_config(3))
            .run_with_observer(|r| reports.push(r.clone()))
            .expect("must converge");

        assert_eq!(reports.len(), outcome.generations);
        assert_eq!(reports[0].generation, 1);
        assert_eq!(reports[0].pool_size, 100);
        assert_eq!(reports[1].pool_size, 1000);
        assert_eq!(reports.last().unwrap().best_mismatch, 0);
        assert_eq!(
            outcome.stats.offspring_evaluated,
            reports.iter().map(|r| r.pool_size as u64).sum::<u64>()
        );
    }

    #[test]
    fn test_history_capped_through_engine() {
        let config = EvolutionConfig {
            history_limit: 4,
            random_seed: Some(13),
            ..Default::default()
        };
        let outcome = EvolutionEngine::new("capped", config)
            .run()
            .expect("must converge");

        assert!(!outcome.best.history.is_empty());
        assert!(outcome.best.history.len() <= 4);
    }
}
