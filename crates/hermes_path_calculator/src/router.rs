use tracing::debug;

use crate::{
    algorithm_options::{CH_DISABLE, OptionMap},
    edge_restrictions::EdgeRestrictions,
    error::Result,
    path_calculator::PathCalculator,
    routing::routing_path::RoutingPath,
    types::NodeId,
};

/// Picks a path calculator per request.
///
/// The hierarchy is used when one is configured and the request does not disable it
/// through `ch.disable`. Requests with unfavored edges or forced source and target
/// edges always go through the flexible calculator.
pub struct Router<'a> {
    ch: Option<Box<dyn PathCalculator + 'a>>,
    flexible: Box<dyn PathCalculator + 'a>,
}

impl<'a> Router<'a> {
    pub fn new(flexible: impl PathCalculator + 'a) -> Self {
        Router {
            ch: None,
            flexible: Box::new(flexible),
        }
    }

    pub fn with_ch(mut self, ch: impl PathCalculator + 'a) -> Self {
        self.ch = Some(Box::new(ch));
        self
    }

    pub fn has_ch(&self) -> bool {
        self.ch.is_some()
    }

    pub fn calc_paths(
        &self,
        source: NodeId,
        target: NodeId,
        restrictions: &EdgeRestrictions,
        hints: &OptionMap,
    ) -> Result<Vec<RoutingPath>> {
        let ch = self
            .ch
            .as_ref()
            .filter(|_| !hints.get_bool(CH_DISABLE, false))
            .filter(|_| restrictions.unfavored_edges().is_empty())
            .filter(|_| !restrictions.has_direction_restrictions());

        match ch {
            Some(calculator) => {
                debug!("Routing {source} -> {target} with CH");
                calculator.calc_paths(source, target, restrictions)
            }
            None => {
                debug!("Routing {source} -> {target} with flexible mode");
                self.flexible.calc_paths(source, target, restrictions)
            }
        }
    }
}
