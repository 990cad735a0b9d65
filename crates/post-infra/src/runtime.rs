//! Process memory and concurrent work counters.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use sysinfo::{Pid, Process, System};

use post_core::ports::{MemoryStats, RuntimeProbe, TaskStats};

/// Process-wide count of in-flight units of work.
///
/// Each worker of the HTTP server runs its own single-threaded runtime, so
/// per-runtime task metrics never see the whole process. Work is counted
/// here instead, by holding a [`TaskGuard`] for as long as it runs.
#[derive(Debug, Clone, Default)]
pub struct TaskGauge {
    count: Arc<AtomicUsize>,
}

impl TaskGauge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one unit of work until the returned guard is dropped.
    pub fn track(&self) -> TaskGuard {
        self.count.fetch_add(1, Ordering::Relaxed);
        TaskGuard {
            count: Arc::clone(&self.count),
        }
    }

    pub fn current(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

/// Keeps its unit of work counted in a [`TaskGauge`].
#[derive(Debug)]
pub struct TaskGuard {
    count: Arc<AtomicUsize>,
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.count.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Runtime probe backed by the OS process table and a [`TaskGauge`].
pub struct ProcessRuntimeProbe {
    pid: Option<Pid>,
    tasks: TaskGauge,
}

impl ProcessRuntimeProbe {
    pub fn new(tasks: TaskGauge) -> Self {
        let pid = sysinfo::get_current_pid()
            .map_err(|e| tracing::warn!(error = %e, "Could not resolve current pid"))
            .ok();
        Self { pid, tasks }
    }

    /// Refresh this process in a fresh process table and read from it.
    fn sample<T>(&self, read: impl FnOnce(&Process) -> T) -> Option<T> {
        let pid = self.pid?;

        let mut system = System::new();
        if !system.refresh_process(pid) {
            tracing::debug!(%pid, "Process not found while sampling");
            return None;
        }

        system.process(pid).map(read)
    }
}

impl RuntimeProbe for ProcessRuntimeProbe {
    fn memory(&self) -> MemoryStats {
        self.sample(|process| MemoryStats {
            allocated_bytes: process.memory(),
            reserved_bytes: process.virtual_memory(),
        })
        .unwrap_or_default()
    }

    fn tasks(&self) -> Option<TaskStats> {
        Some(TaskStats {
            alive_tasks: self.tasks.current(),
            threads: self
                .sample(|process| process.tasks().map(|threads| threads.len()))
                .flatten(),
        })
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::watch;
    use tokio::task::{self, LocalSet};

    use super::*;

    #[test]
    fn test_guard_releases_count() {
        let gauge = TaskGauge::new();

        let first = gauge.track();
        let second = gauge.clone().track();
        assert_eq!(gauge.current(), 2);

        drop(first);
        assert_eq!(gauge.current(), 1);
        drop(second);
        assert_eq!(gauge.current(), 0);
    }

    #[tokio::test]
    async fn test_counts_tasks_on_local_set() {
        let gauge = TaskGauge::new();
        let probe = ProcessRuntimeProbe::new(gauge.clone());
        let (release, wait) = watch::channel(());

        LocalSet::new()
            .run_until(async {
                let handles: Vec<_> = (0..2000)
                    .map(|_| {
                        let guard = gauge.track();
                        let mut wait = wait.clone();
                        task::spawn_local(async move {
                            let _guard = guard;
                            let _ = wait.changed().await;
                        })
                    })
                    .collect();

                task::yield_now().await;
                assert_eq!(probe.tasks().unwrap().alive_tasks, 2000);

                release.send(()).unwrap();
                for handle in handles {
                    handle.await.unwrap();
                }
            })
            .await;

        assert_eq!(probe.tasks().unwrap().alive_tasks, 0);
    }

    #[test]
    fn test_tasks_available_outside_runtime() {
        let stats = ProcessRuntimeProbe::new(TaskGauge::new()).tasks().unwrap();
        assert_eq!(stats.alive_tasks, 0);
    }

    #[test]
    fn test_memory_is_sampled() {
        let stats = ProcessRuntimeProbe::new(TaskGauge::new()).memory();
        assert!(stats.allocated_bytes > 0);
    }
}
