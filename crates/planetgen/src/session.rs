//! Generation sessions
//!
//! A session owns a seed and generates the planet state once. Every other
//! generator then runs on its own channel. Each channel stream is rebuilt
//! from the same seed text, so a generator's output depends only on the seed
//! and never on which other generators ran before it.

use log::debug;
use serde::Serialize;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::catalog::Catalog;
use crate::clouds::{CloudElement, generate_cloud_paths};
use crate::color::Rgb;
use crate::config::ViewParams;
use crate::geology::{GeologyPath, generate_geology_paths};
use crate::hints::RenderHints;
use crate::layers::generate_layer_thresholds;
use crate::palette::{PALETTE_LEN, planet_palette};
use crate::rings::{RingSystem, planet_rings};
use crate::state::{PlanetState, generate_planet_state};
use crate::stream::Stream;

/// Independent draw sequences within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    State,
    Geology,
    Clouds,
    Rings,
    /// Layer threshold jitter
    Jitter,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::State,
        Channel::Geology,
        Channel::Clouds,
        Channel::Rings,
        Channel::Jitter,
    ];
}

/// One planet and the generators that derive from it
#[derive(Debug, Clone)]
pub struct GenerationSession<'c> {
    seed: String,
    catalog: Catalog<'c>,
    state: PlanetState,
}

impl GenerationSession<'static> {
    /// Session over the built-in catalogs
    ///
    /// ```
    /// use planetgen::session::GenerationSession;
    ///
    /// let session = GenerationSession::new("test-1");
    /// assert_eq!(session.state().solid_name(), "Obsidian");
    /// assert_eq!(session.palette()[3].to_hex(), "#18181b");
    /// ```
    pub fn new(seed: impl Into<String>) -> Self {
        Self::with_catalog(seed, Catalog::standard())
    }
}

impl<'c> GenerationSession<'c> {
    pub fn with_catalog(seed: impl Into<String>, catalog: Catalog<'c>) -> Self {
        let seed = seed.into();
        let mut stream = Stream::from_text(&seed);
        let state = generate_planet_state(&mut stream, &catalog);
        debug!("session {:?}: {}", seed, state);
        Self {
            seed,
            catalog,
            state,
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn catalog(&self) -> &Catalog<'c> {
        &self.catalog
    }

    pub fn state(&self) -> &PlanetState {
        &self.state
    }

    /// A fresh stream for `channel`, positioned at its first draw.
    ///
    /// Every channel replays the seed from the start; the argument only names
    /// the consumer.
    pub fn stream(&self, _channel: Channel) -> Stream {
        Stream::from_text(&self.seed)
    }

    pub fn palette(&self) -> [Rgb; PALETTE_LEN] {
        planet_palette(&self.state)
    }

    /// Jittered thresholds, one per palette color
    pub fn layer_thresholds(&self) -> Vec<f64> {
        let solid = &self.state.solid.material;
        generate_layer_thresholds(
            &mut self.stream(Channel::Jitter),
            solid.kind,
            solid.roughness,
            PALETTE_LEN,
        )
    }

    pub fn geology(&self) -> Vec<GeologyPath> {
        generate_geology_paths(
            &mut self.stream(Channel::Geology),
            self.state.roughness,
            self.state.tilt,
        )
    }

    pub fn clouds(&self) -> Vec<CloudElement> {
        generate_cloud_paths(&mut self.stream(Channel::Clouds), &self.state)
    }

    /// `None` for planets without rings
    pub fn rings(&self) -> Option<RingSystem> {
        planet_rings(&mut self.stream(Channel::Rings), &self.state)
    }

    pub fn render_hints(&self, view: &ViewParams) -> RenderHints {
        RenderHints::new(&self.seed, &self.state, &self.layer_thresholds(), view)
    }

    /// Everything generated for this planet under `view`
    pub fn snapshot(&self, view: &ViewParams) -> PlanetSnapshot {
        let layer_thresholds = self.layer_thresholds();
        let hints = RenderHints::new(&self.seed, &self.state, &layer_thresholds, view);
        PlanetSnapshot {
            seed: self.seed.clone(),
            state: self.state.clone(),
            palette: self.palette(),
            layer_thresholds,
            geology: self.geology(),
            clouds: self.clouds(),
            rings: self.rings(),
            hints,
        }
    }
}

/// A complete generated planet, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub struct PlanetSnapshot {
    pub seed: String,
    pub state: PlanetState,
    pub palette: [Rgb; PALETTE_LEN],
    pub layer_thresholds: Vec<f64>,
    pub geology: Vec<GeologyPath>,
    pub clouds: Vec<CloudElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rings: Option<RingSystem>,
    pub hints: RenderHints,
}
