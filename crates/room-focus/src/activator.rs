//! Raising a running terminal application's windows.
//!
//! Activation is best-effort and never launches anything: if the target
//! application is not running there is nothing to focus.

/// Something that can bring an application to the front by bundle id.
pub trait AppActivator {
    fn activate(&self, bundle_id: &str);
}

impl<T: AppActivator + ?Sized> AppActivator for &T {
    fn activate(&self, bundle_id: &str) {
        (**self).activate(bundle_id)
    }
}

/// A process from the OS's running-application list.
pub trait RunningApplication {
    fn bundle_id(&self) -> Option<String>;

    /// Raise all windows, ignoring other apps' claim to stay frontmost.
    /// Returns whether the OS accepted the request.
    fn activate(&self) -> bool;
}

/// Activate the first application whose bundle id matches.
///
/// Returns `false` without side effects when nothing matches.
pub fn activate_matching<A, I>(apps: I, bundle_id: &str) -> bool
where
    A: RunningApplication,
    I: IntoIterator<Item = A>,
{
    let Some(app) = apps
        .into_iter()
        .find(|app| app.bundle_id().as_deref() == Some(bundle_id))
    else {
        tracing::debug!(bundle_id, "application not running");
        return false;
    };
    let accepted = app.activate();
    if !accepted {
        tracing::debug!(bundle_id, "activation request refused");
    }
    accepted
}

/// Activator backed by the host's window server.
///
/// On macOS this walks `NSWorkspace.runningApplications`; elsewhere there is
/// no bundle-id registry and activation is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkspaceActivator;

impl AppActivator for WorkspaceActivator {
    fn activate(&self, bundle_id: &str) {
        platform::activate(bundle_id);
    }
}

#[cfg(target_os = "macos")]
mod platform {
    use objc2::rc::Retained;
    use objc2_app_kit::{NSApplicationActivationOptions, NSRunningApplication, NSWorkspace};

    use super::RunningApplication;

    struct AppKitApplication(Retained<NSRunningApplication>);

    impl RunningApplication for AppKitApplication {
        #[allow(unused_unsafe)]
        fn bundle_id(&self) -> Option<String> {
            let id = unsafe { self.0.bundleIdentifier() };
            id.map(|id| id.to_string())
        }

        // ActivateIgnoringOtherApps is deprecated on macOS 14 but still honored
        // when the caller is not the active app.
        #[allow(deprecated, unused_unsafe)]
        fn activate(&self) -> bool {
            let options = NSApplicationActivationOptions::ActivateAllWindows
                | NSApplicationActivationOptions::ActivateIgnoringOtherApps;
            unsafe { self.0.activateWithOptions(options) }
        }
    }

    #[allow(unused_unsafe)]
    pub(super) fn activate(bundle_id: &str) {
        let apps = unsafe { NSWorkspace::sharedWorkspace().runningApplications() };
        super::activate_matching(apps.iter().map(AppKitApplication), bundle_id);
    }
}

#[cfg(not(target_os = "macos"))]
mod platform {
    pub(super) fn activate(bundle_id: &str) {
        tracing::trace!(bundle_id, "window activation unsupported on this platform");
    }
}
