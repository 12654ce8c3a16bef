mod rand_adapter;

pub use rand_adapter::RandCsprng;

/// Cryptographically secure pseudorandom number generator.
///
/// TODO Explain what this means and how it's different from a regular PRNG.
pub trait Csprng {
    fn next(&mut self) -> u8;

    fn iter(&mut self) -> impl Iterator<Item = u8>
    where
        Self: Sized,
    {
        CsprngIter(self)
    }
}

struct CsprngIter<'a, C>(&'a mut C);

impl<C: Csprng> Iterator for CsprngIter<'_, C> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.0.next())
    }
}
