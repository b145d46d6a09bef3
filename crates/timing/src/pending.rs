/// A scheduled invocation waiting on its timer.
///
/// `generation` ties the timer callback to this entry: a callback whose
/// generation no longer matches lost a race with a later call or a cancel and
/// must do nothing.
pub(crate) struct Pending<A, H> {
    pub generation: u64,
    pub handle: H,
    pub args: A,
}

/// Takes the pending entry if it belongs to `generation`, leaving any newer
/// entry in place.
pub(crate) fn take_matching<A, H>(slot: &mut Option<Pending<A, H>>, generation: u64) -> Option<Pending<A, H>> {
    if slot.as_ref().is_some_and(|pending| pending.generation == generation) {
        slot.take()
    } else {
        None
    }
}
