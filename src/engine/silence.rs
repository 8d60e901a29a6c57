//! Process-level output suppression around engine calls.
//!
//! Engines write diagnostics straight to file descriptors 1 and 2, so
//! swapping Rust's `Stdout` handle is not enough: the descriptors themselves
//! are pointed at the null device and put back afterwards. Descriptors are
//! process-wide, so the redirect is reference counted behind a global lock:
//! the first live [`Silence`] engages it and the last one dropped restores it.
//! Suppression is best-effort. Failing to engage it never fails the call it
//! was wrapping.
use std::io::Write;
use std::sync::Mutex;

static REDIRECT: Mutex<Redirect> = Mutex::new(Redirect::idle());

/// Keeps stdout and stderr silenced while alive.
///
/// The redirect covers the whole process. While any thread holds a guard,
/// terminal output from every other thread is dropped too, including log
/// lines from parallel environments. File-backed loggers are unaffected.
#[must_use]
pub struct Silence(());

impl Silence {
    /// `None` when the platform can't redirect or the redirect failed to engage.
    pub fn acquire() -> Option<Self> {
        if !Redirect::SUPPORTED {
            return None;
        }
        let mut redirect = REDIRECT.lock().unwrap_or_else(|e| e.into_inner());
        if redirect.depth == 0 {
            if let Err(e) = redirect.engage() {
                log::debug!("output suppression unavailable: {}", e);
                return None;
            }
        }
        redirect.depth += 1;
        Some(Self(()))
    }
    /// whether any guard is currently alive
    pub fn engaged() -> bool {
        REDIRECT.lock().unwrap_or_else(|e| e.into_inner()).depth > 0
    }
}

impl Drop for Silence {
    fn drop(&mut self) {
        let mut redirect = REDIRECT.lock().unwrap_or_else(|e| e.into_inner());
        redirect.depth -= 1;
        if redirect.depth == 0 {
            redirect.release();
        }
    }
}

fn flush() {
    let _ = std::io::stdout().flush();
    let _ = std::io::stderr().flush();
}

struct Redirect {
    depth: usize,
    #[cfg(unix)]
    sink: Option<libc::c_int>,
    #[cfg(unix)]
    saved: Vec<(libc::c_int, libc::c_int)>,
}

#[cfg(unix)]
impl Redirect {
    const SUPPORTED: bool = true;

    const fn idle() -> Self {
        Self {
            depth: 0,
            sink: None,
            saved: Vec::new(),
        }
    }

    /// point 1 and 2 at /dev/null, remembering duplicates of the originals.
    /// on failure everything engaged so far is rolled back.
    fn engage(&mut self) -> std::io::Result<()> {
        flush();
        let sink = unsafe { libc::open(c"/dev/null".as_ptr(), libc::O_WRONLY | libc::O_CLOEXEC) };
        if sink < 0 {
            return Err(std::io::Error::last_os_error());
        }
        self.sink = Some(sink);
        for fd in [libc::STDOUT_FILENO, libc::STDERR_FILENO] {
            let copy = unsafe { libc::fcntl(fd, libc::F_DUPFD_CLOEXEC, 0) };
            if copy < 0 {
                let e = std::io::Error::last_os_error();
                self.release();
                return Err(e);
            }
            self.saved.push((fd, copy));
            if unsafe { libc::dup2(sink, fd) } < 0 {
                let e = std::io::Error::last_os_error();
                self.release();
                return Err(e);
            }
        }
        Ok(())
    }

    /// restore originals in reverse order and close every descriptor we opened.
    fn release(&mut self) {
        flush();
        for (fd, copy) in self.saved.drain(..).rev() {
            if unsafe { libc::dup2(copy, fd) } < 0 {
                log::warn!(
                    "failed to restore descriptor {}: {}",
                    fd,
                    std::io::Error::last_os_error()
                );
            }
            unsafe { libc::close(copy) };
        }
        if let Some(sink) = self.sink.take() {
            unsafe { libc::close(sink) };
        }
    }
}

#[cfg(not(unix))]
impl Redirect {
    const SUPPORTED: bool = false;

    const fn idle() -> Self {
        Self { depth: 0 }
    }
    fn engage(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::from(std::io::ErrorKind::Unsupported))
    }
    fn release(&mut self) {}
}
