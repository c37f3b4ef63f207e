use rayon::ThreadPool;

/// Fork-join primitive consumed by the parallel engine.
///
/// - `join` runs both closures to completion before returning.
/// - Either closure may run on the calling thread; callers must not rely on which.
pub trait ForkJoin: Sync {
    fn join<A, B, RA, RB>(&self, oper_a: A, oper_b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send;
}

/// Joins on rayon's global thread pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct RayonJoin;

impl ForkJoin for RayonJoin {
    #[inline]
    fn join<A, B, RA, RB>(&self, oper_a: A, oper_b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        rayon::join(oper_a, oper_b)
    }
}

/// Joins inside a caller-provided rayon pool.
#[derive(Clone, Copy, Debug)]
pub struct PoolJoin<'a> {
    pool: &'a ThreadPool,
}

impl<'a> PoolJoin<'a> {
    pub fn new(pool: &'a ThreadPool) -> Self {
        Self { pool }
    }
}

impl ForkJoin for PoolJoin<'_> {
    #[inline]
    fn join<A, B, RA, RB>(&self, oper_a: A, oper_b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        self.pool.install(|| rayon::join(oper_a, oper_b))
    }
}

/// Runs `oper_a` then `oper_b` on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineJoin;

impl ForkJoin for InlineJoin {
    #[inline]
    fn join<A, B, RA, RB>(&self, oper_a: A, oper_b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        let ra = oper_a();
        let rb = oper_b();
        (ra, rb)
    }
}
