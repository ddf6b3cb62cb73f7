use crate::config::PackerConfig;
use crate::error::Result;
use crate::model::{Container, Item, PackingResult};
use crate::pipeline::pack_with_config;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One independent packing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackRequest {
    pub container: Container,
    pub items: Vec<Item>,
}

/// Packs every request on its own and returns the results in request order.
/// With the `parallel` feature the runs are spread over the rayon pool.
pub fn pack_many(requests: &[PackRequest], cfg: &PackerConfig) -> Vec<Result<PackingResult>> {
    #[cfg(feature = "parallel")]
    {
        requests
            .par_iter()
            .map(|r| pack_with_config(&r.container, &r.items, cfg))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        requests
            .iter()
            .map(|r| pack_with_config(&r.container, &r.items, cfg))
            .collect()
    }
}
