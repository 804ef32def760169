// Callwarden: scam-call risk classification and report synthesis.
//
// This is the library root. The core pipeline is pure and synchronous:
// analysis (input model + normalizer) -> scoring (tier classification) ->
// report (section synthesis, flat export, terminal rendering). The client
// module is the only part that touches the network.

pub mod analysis;
pub mod client;
pub mod report;
pub mod scoring;
