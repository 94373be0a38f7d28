use futures_util::future::try_join_all;

use crate::{AssetLoadError, AssetSet, AssetSource};

/// Aggregate state of the current batch load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(AssetLoadError),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn error(&self) -> Option<&AssetLoadError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Resolves every identifier concurrently, preserving order.
///
/// All-or-nothing: the first failing identifier rejects the whole batch.
pub async fn load_batch<S: AssetSource + ?Sized>(
    source: &S,
    identifiers: &[String],
) -> Result<AssetSet<S::Pixels>, AssetLoadError> {
    let assets = try_join_all(identifiers.iter().map(|id| source.resolve(id))).await?;
    Ok(AssetSet::new(assets))
}

/// A started load. Run it against a source, then hand the completion back to the engine.
///
/// Tickets carry the generation they were issued for, so the engine can tell whether a newer
/// load has started in the meantime. A ticket is consumed by [`LoadTicket::run`] and cannot be
/// cloned, so each generation yields at most one completion.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    identifiers: Vec<String>,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub async fn run<S: AssetSource + ?Sized>(self, source: &S) -> LoadCompletion<S::Pixels> {
        let result = load_batch(source, &self.identifiers).await;
        LoadCompletion {
            generation: self.generation,
            result,
        }
    }
}

/// The result of running a [`LoadTicket`].
#[derive(Debug)]
pub struct LoadCompletion<P> {
    pub generation: u64,
    pub result: Result<AssetSet<P>, AssetLoadError>,
}

/// What applying a [`LoadCompletion`] did to the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Ready { count: usize },
    Failed(AssetLoadError),
    /// A newer load started before this one finished, or this generation was already
    /// completed; the result was dropped.
    Stale { generation: u64, current: u64 },
}

/// Owns the identifier list, the loaded assets and the load generation counter.
#[derive(Clone, Debug)]
pub struct AssetLoader<P> {
    identifiers: Vec<String>,
    generation: u64,
    /// Whether a completion for `generation` has already been applied.
    completed: bool,
    status: LoadStatus,
    assets: AssetSet<P>,
}

impl<P> AssetLoader<P> {
    pub fn new(identifiers: Vec<String>) -> Self {
        Self {
            identifiers,
            generation: 0,
            completed: false,
            status: LoadStatus::Loading,
            assets: AssetSet::default(),
        }
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn assets(&self) -> &AssetSet<P> {
        &self.assets
    }

    /// Starts a load of the current identifier list, superseding any load in flight.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        self.completed = false;
        self.status = LoadStatus::Loading;
        self.assets = AssetSet::default();
        sdebug!(
            generation = self.generation,
            count = self.identifiers.len(),
            "AssetLoader::begin"
        );
        LoadTicket {
            generation: self.generation,
            identifiers: self.identifiers.clone(),
        }
    }

    /// Replaces the identifier list and starts a full reload.
    pub fn replace(&mut self, identifiers: Vec<String>) -> LoadTicket {
        self.identifiers = identifiers;
        self.begin()
    }

    /// Applies the first completion for the current generation. Anything else (an older
    /// generation, or a repeat delivery) is reported as [`LoadOutcome::Stale`] and ignored.
    pub fn complete(&mut self, completion: LoadCompletion<P>) -> LoadOutcome {
        if completion.generation != self.generation || self.completed {
            sdebug!(
                generation = completion.generation,
                current = self.generation,
                completed = self.completed,
                "AssetLoader::complete: discarding stale load"
            );
            return LoadOutcome::Stale {
                generation: completion.generation,
                current: self.generation,
            };
        }
        self.completed = true;

        match completion.result {
            Ok(assets) => {
                let count = assets.len();
                debug_assert_eq!(count, self.identifiers.len());
                sdebug!(generation = self.generation, count, "AssetLoader::complete: ready");
                self.assets = assets;
                self.status = LoadStatus::Ready;
                LoadOutcome::Ready { count }
            }
            Err(err) => {
                swarn!(
                    generation = self.generation,
                    identifier = %err.identifier,
                    reason = %err.reason,
                    "AssetLoader::complete: load failed"
                );
                self.assets = AssetSet::default();
                self.status = LoadStatus::Failed(err.clone());
                LoadOutcome::Failed(err)
            }
        }
    }
}
