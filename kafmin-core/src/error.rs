use kafmin_model::Fault;

/// Operations fail with a submission-level [`Fault`]; per-key faults are
/// embedded in the returned data instead.
pub type Result<T> = std::result::Result<T, Fault>;
