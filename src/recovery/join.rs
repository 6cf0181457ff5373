use crate::zone::Zone;
use log::debug;
use rayon::prelude::*;
use std::thread::{self, JoinHandle};
impl Zone {
    /// Spawn a thread that runs `f` under its own boundary of this zone.
    pub fn spawn<T, F>(&self, f: F) -> JoinHandle<anyhow::Result<T>>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let zone = self.clone();
        thread::spawn(move || zone.catch(f))
    }
    /// Join a thread and classify the payload it terminated with, if any.
    ///
    /// A foreign payload resumes unwinding on the joining thread.
    pub fn join<T>(&self, handle: JoinHandle<T>) -> anyhow::Result<T> {
        handle.join().map_err(|payload| self.classify(payload))
    }
    pub async fn join_task<T>(&self, handle: tokio::task::JoinHandle<T>) -> anyhow::Result<T> {
        match handle.await {
            Ok(value) => Ok(value),
            Err(err) => {
                match err.try_into_panic() {
                    Ok(payload) => Err(self.classify(payload)),
                    Err(err) => {
                        debug!("{} task ended without a result: {}", self.id(), err);
                        Err(err.into())
                    }
                }
            }
        }
    }
    /// Map `f` over `items` on the rayon pool, one boundary per item.
    /// Results keep the order of `items`.
    pub fn par_catch<I, T, F>(&self, items: Vec<I>, f: F) -> Vec<anyhow::Result<T>>
    where
        I: Send,
        T: Send,
        F: Fn(I) -> T + Send + Sync,
    {
        items.into_par_iter().map(|item| self.catch(|| f(item))).collect()
    }
}
#[cfg(test)]
mod tests {
    use crate::zone::Zone;
    use std::{panic, thread, time::Duration};
    #[test]
    fn test_spawned_thread_has_own_boundary() {
        let zone = Zone::new();
        let inner = zone.clone();
        let handle = zone
            .spawn(move || {
                inner.check(Err::<(), _>(anyhow::anyhow!("worker failed")));
                1
            });
        let result = handle.join().unwrap();
        assert_eq!(result.unwrap_err().to_string(), "worker failed");
        let ok = zone.spawn(|| 5).join().unwrap();
        assert_eq!(ok.unwrap(), 5);
    }
    #[test]
    fn test_join_classifies_thread_payload() {
        let zone = Zone::new();
        let inner = zone.clone();
        let handle = thread::spawn(move || -> u32 { inner.raise(anyhow::anyhow!("handed off")) });
        let err = zone.join(handle).unwrap_err();
        assert_eq!(err.to_string(), "handed off");
    }
    #[test]
    fn test_join_reraises_foreign_payload() {
        let zone = Zone::new();
        let handle = thread::spawn(|| -> u8 { panic::resume_unwind(Box::new("foreign")) });
        let outcome = panic::catch_unwind(panic::AssertUnwindSafe(|| zone.join(handle)));
        let payload = outcome.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"foreign"));
    }
    #[tokio::test]
    async fn test_join_task_classifies_task_payload() {
        let zone = Zone::new();
        let inner = zone.clone();
        let handle = tokio::spawn(async move {
            inner.check(Err::<(), _>(anyhow::anyhow!("task failed")));
            1u32
        });
        let err = zone.join_task(handle).await.unwrap_err();
        assert_eq!(err.to_string(), "task failed");
        let ok = zone.join_task(tokio::spawn(async { 3u32 })).await.unwrap();
        assert_eq!(ok, 3);
    }
    #[tokio::test]
    async fn test_join_task_reports_cancellation() {
        let zone = Zone::new();
        let handle = tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });
        handle.abort();
        let err = zone.join_task(handle).await.unwrap_err();
        let join_err = err.downcast_ref::<tokio::task::JoinError>().unwrap();
        assert!(join_err.is_cancelled());
    }
    #[test]
    fn test_par_catch_isolates_items() {
        let zone = Zone::new();
        let results = zone
            .par_catch(
                vec![1u32, 2, 3, 4],
                |n| {
                    if n % 2 == 0 {
                        zone.raise(anyhow::anyhow!("even: {n}"));
                    }
                    n * 10
                },
            );
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap(), & 10);
        assert_eq!(results[1].as_ref().unwrap_err().to_string(), "even: 2");
        assert_eq!(results[2].as_ref().unwrap(), & 30);
        assert_eq!(results[3].as_ref().unwrap_err().to_string(), "even: 4");
    }
}
