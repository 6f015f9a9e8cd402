// Domain layer: core models. No behavior beyond construction invariants;
// external responses are read-only data.

pub mod plaid;
pub mod table;
