use proptest::prelude::*;

pub fn bool_strat(ovride: Option<BoxedStrategy<bool>>) -> BoxedStrategy<bool> {
    ovride.unwrap_or_else(|| any::<bool>().boxed())
}

pub fn pk_strat(ovrride: Option<BoxedStrategy<[u8; 32]>>) -> BoxedStrategy<[u8; 32]> {
    ovrride.unwrap_or_else(|| any::<[u8; 32]>().boxed())
}

pub fn seed_strat() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>()
}
