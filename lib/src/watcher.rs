pub(crate) use futures::channel::mpsc::Receiver;
use futures::{SinkExt, channel::mpsc::channel};
use notify::event::{ModifyKind, RenameMode};
use notify::{Config, Event, EventKind, RecursiveMode};
pub(crate) use notify::{INotifyWatcher, Watcher};

use std::path::{Path, PathBuf};

make_log_macro!(debug, "watcher");

/// A single message out of the watch subscription.
#[derive(Debug)]
pub enum WatchEvent {
    /// Something happened to this path inside the watched directory.
    Changed(PathBuf),
    /// The notification backend reported an error.
    Failed(notify::Error),
}

/// Turn one notification from the backend into the events worth acting on.
pub(crate) fn watch_events(res: notify::Result<Event>) -> Vec<WatchEvent> {
    match res {
        // The kernel queue overflowed, so changes may have been lost
        Ok(event) if event.need_rescan() => vec![WatchEvent::Failed(notify::Error::generic(
            "event queue overflowed",
        ))],
        // close-after-write, the write itself already came through as a modify
        Ok(event) if event.kind.is_access() => Vec::new(),
        // paired From/To events carry the same paths
        Ok(Event {
            kind: EventKind::Modify(ModifyKind::Name(RenameMode::Both)),
            ..
        }) => Vec::new(),
        Ok(event) => event.paths.into_iter().map(WatchEvent::Changed).collect(),
        Err(e) => vec![WatchEvent::Failed(e)],
    }
}

/// Watch the entries of `dir` (not recursively) and forward every change as a
/// [`WatchEvent`]. The subscription lives as long as the returned watcher.
pub fn brightness_watcher<P: AsRef<Path>>(
    dir: P,
) -> notify::Result<(INotifyWatcher, Receiver<WatchEvent>)> {
    let (mut tx, rx) = channel(1);

    let mut watcher = INotifyWatcher::new(
        move |res: notify::Result<Event>| {
            let events = watch_events(res);
            futures::executor::block_on(async {
                for event in events {
                    debug!("{:?}", event);
                    if tx.send(event).await.is_err() {
                        // receiver is gone, nobody is listening anymore
                        return;
                    }
                }
            });
        },
        Config::default(),
    )?;

    watcher.watch(dir.as_ref(), RecursiveMode::NonRecursive)?;

    Ok((watcher, rx))
}

#[cfg(test)]
mod tests {
    use super::*;

    use notify::event::{AccessKind, AccessMode, CreateKind, DataChange, Flag};

    #[test]
    fn modify_is_forwarded() {
        let event = Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Any)))
            .add_path(PathBuf::from("/dev/bl/brightness"));

        match watch_events(Ok(event)).as_slice() {
            [WatchEvent::Changed(path)] => assert_eq!(path, Path::new("/dev/bl/brightness")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn create_is_forwarded() {
        let event = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/dev/bl/brightness"));

        assert!(matches!(
            watch_events(Ok(event)).as_slice(),
            [WatchEvent::Changed(_)]
        ));
    }

    #[test]
    fn close_after_write_is_dropped() {
        let event = Event::new(EventKind::Access(AccessKind::Close(AccessMode::Write)))
            .add_path(PathBuf::from("/dev/bl/brightness"));

        assert!(watch_events(Ok(event)).is_empty());
    }

    #[test]
    fn rename_reported_once() {
        let to = Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::To)))
            .add_path(PathBuf::from("/dev/bl/brightness"));
        let both = Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::Both)))
            .add_path(PathBuf::from("/dev/bl/brightness.tmp"))
            .add_path(PathBuf::from("/dev/bl/brightness"));

        assert_eq!(watch_events(Ok(to)).len(), 1);
        assert!(watch_events(Ok(both)).is_empty());
    }

    #[test]
    fn overflow_is_an_error() {
        let event = Event::new(EventKind::Other).set_flag(Flag::Rescan);

        assert!(matches!(
            watch_events(Ok(event)).as_slice(),
            [WatchEvent::Failed(_)]
        ));
    }

    #[test]
    fn backend_error_is_forwarded() {
        let res = Err(notify::Error::generic("inotify went away"));

        match watch_events(res).as_slice() {
            [WatchEvent::Failed(e)] => assert!(e.to_string().contains("inotify went away")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
