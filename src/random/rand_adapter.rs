use {crate::Csprng, rand::RngCore};

/// Adapts any [`rand`](https://docs.rs/rand) generator into a [`Csprng`],
/// so the mirror-field [key
/// generator](crate::MirrorFieldKeyGenerator) can be driven either by a
/// wall-clock-seeded `rand::rngs::ThreadRng` in production or a seeded
/// `rand::rngs::StdRng` in tests, without the core generator code depending
/// on `rand` directly.
#[derive(Debug, Clone)]
pub struct RandCsprng<R>(pub R);

impl<R: RngCore> Csprng for RandCsprng<R> {
    fn next(&mut self) -> u8 {
        self.0.next_u32() as u8
    }
}
