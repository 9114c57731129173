use crate::ports::{AssetFetcher, GenerationClient, Pacer, StorageClient};

/// Capabilities a pipeline run needs, injected at construction.
pub struct PipelineContext<G, F, S, P>
where
    G: GenerationClient,
    F: AssetFetcher,
    S: StorageClient,
    P: Pacer,
{
    generator: G,
    fetcher: F,
    storage: S,
    pacer: P,
}

impl<G, F, S, P> PipelineContext<G, F, S, P>
where
    G: GenerationClient,
    F: AssetFetcher,
    S: StorageClient,
    P: Pacer,
{
    /// Create a new pipeline context.
    pub fn new(generator: G, fetcher: F, storage: S, pacer: P) -> Self {
        Self { generator, fetcher, storage, pacer }
    }

    /// Get a reference to the generation client.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Get a reference to the asset fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Get a reference to the storage client.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Get a reference to the pacer.
    pub fn pacer(&self) -> &P {
        &self.pacer
    }
}
