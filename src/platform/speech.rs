use async_trait::async_trait;
use std::process::Stdio;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tokio::process::{Child, Command};
use tokio::sync::{Mutex, oneshot};
use tracing::debug;

use crate::error::WidgetError;

/// Reads text aloud.
///
/// `speak` returns once playback has started; it does not wait for it to
/// finish. A new utterance replaces one that is still playing.
#[async_trait]
pub trait Speaker: Send + Sync {
    async fn speak(&self, text: &str) -> Result<(), WidgetError>;

    /// Waits until nothing is being read aloud.
    async fn finish(&self) {}
}

/// The platform text-to-speech voice.
///
/// With a configured program the text is passed as its last argument;
/// otherwise the native voice is used where one is built in.
#[derive(Debug)]
pub struct SystemSpeaker {
    backend: Backend,
}

#[derive(Debug)]
#[cfg_attr(target_os = "linux", allow(dead_code))]
enum Backend {
    Program {
        command: Vec<String>,
        current: Mutex<Option<Child>>,
    },
    Voice(VoiceThread),
    Unavailable,
}

impl SystemSpeaker {
    pub fn new(command: Option<Vec<String>>) -> Self {
        let backend = match command.filter(|c| !c.is_empty()) {
            Some(command) => Backend::program(command),
            None => Backend::native(),
        };
        Self { backend }
    }
}

impl Backend {
    fn program(command: Vec<String>) -> Self {
        Self::Program {
            command,
            current: Mutex::new(None),
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn native() -> Self {
        Self::Voice(VoiceThread::spawn(|| {
            tts::Tts::default().map_err(|e| e.to_string())
        }))
    }

    // Speech Dispatcher is the Linux voice; `spd-say` reaches it without
    // linking libspeechd.
    #[cfg(target_os = "linux")]
    fn native() -> Self {
        super::detect(&[&["spd-say", "--wait"], &["espeak-ng"], &["espeak"]])
            .map_or(Self::Unavailable, Self::program)
    }
}

#[async_trait]
impl Speaker for SystemSpeaker {
    async fn speak(&self, text: &str) -> Result<(), WidgetError> {
        match &self.backend {
            Backend::Program { command, current } => {
                speak_with_program(command, current, text).await
            }
            Backend::Voice(voice) => voice.speak(text).await,
            Backend::Unavailable => Err(WidgetError::SpeechFailure(
                "no speech backend found; set [speech] command in the config file".to_string(),
            )),
        }
    }

    async fn finish(&self) {
        match &self.backend {
            Backend::Program { current, .. } => {
                if let Some(child) = current.lock().await.as_mut()
                    && let Err(e) = child.wait().await
                {
                    debug!("could not wait for utterance: {e}");
                }
            }
            Backend::Voice(voice) => voice.finish().await,
            Backend::Unavailable => {}
        }
    }
}

async fn speak_with_program(
    command: &[String],
    current: &Mutex<Option<Child>>,
    text: &str,
) -> Result<(), WidgetError> {
    let Some((program, args)) = command.split_first() else {
        return Err(WidgetError::SpeechFailure("empty speech command".to_string()));
    };

    let mut current = current.lock().await;
    if let Some(mut previous) = current.take()
        && let Err(e) = previous.kill().await
    {
        debug!("could not stop previous utterance: {e}");
    }

    let child = Command::new(program)
        .args(args)
        .arg(text)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| WidgetError::SpeechFailure(format!("failed to run '{program}': {e}")))?;

    *current = Some(child);
    Ok(())
}

/// A speech engine living on its own thread.
#[cfg_attr(target_os = "linux", allow(dead_code))]
trait Engine {
    /// Starts reading `text`, interrupting anything still playing.
    fn say(&mut self, text: &str) -> Result<(), String>;

    fn speaking(&self) -> bool;
}

#[cfg(not(target_os = "linux"))]
impl Engine for tts::Tts {
    fn say(&mut self, text: &str) -> Result<(), String> {
        self.speak(text, true).map(|_| ()).map_err(|e| e.to_string())
    }

    fn speaking(&self) -> bool {
        self.is_speaking().unwrap_or(false)
    }
}

#[cfg_attr(target_os = "linux", allow(dead_code))]
enum VoiceRequest {
    Say(String, oneshot::Sender<Result<(), WidgetError>>),
    Finish(oneshot::Sender<()>),
}

#[cfg_attr(target_os = "linux", allow(dead_code))]
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Owns the engine on a dedicated thread; platform voices are not all
/// `Send`, so the engine never leaves the thread that created it.
#[derive(Debug)]
#[cfg_attr(target_os = "linux", allow(dead_code))]
struct VoiceThread {
    requests: mpsc::Sender<VoiceRequest>,
}

#[cfg_attr(target_os = "linux", allow(dead_code))]
impl VoiceThread {
    fn spawn<E, F>(init: F) -> Self
    where
        E: Engine,
        F: FnOnce() -> Result<E, String> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("tbox-speech".to_string())
            .spawn(move || run_voice(init, &rx));
        if let Err(e) = spawned {
            debug!("could not start speech thread: {e}");
        }
        Self { requests: tx }
    }

    async fn speak(&self, text: &str) -> Result<(), WidgetError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.requests
            .send(VoiceRequest::Say(text.to_string(), reply_tx))
            .map_err(|_| stopped())?;
        reply_rx.await.map_err(|_| stopped())?
    }

    async fn finish(&self) {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self.requests.send(VoiceRequest::Finish(reply_tx)).is_ok() {
            let _ = reply_rx.await;
        }
    }
}

#[cfg_attr(target_os = "linux", allow(dead_code))]
fn stopped() -> WidgetError {
    WidgetError::SpeechFailure("speech thread is not running".to_string())
}

#[cfg_attr(target_os = "linux", allow(dead_code))]
fn run_voice<E, F>(init: F, requests: &mpsc::Receiver<VoiceRequest>)
where
    E: Engine,
    F: FnOnce() -> Result<E, String>,
{
    let mut engine = init();
    if let Err(e) = &engine {
        debug!("native voice unavailable: {e}");
    }

    for request in requests {
        match request {
            VoiceRequest::Say(text, reply) => {
                let outcome = match &mut engine {
                    Ok(engine) => engine.say(&text),
                    Err(e) => Err(format!("no speech backend: {e}")),
                };
                let _ = reply.send(outcome.map_err(WidgetError::SpeechFailure));
            }
            VoiceRequest::Finish(reply) => {
                if let Ok(engine) = &engine {
                    while engine.speaking() {
                        thread::sleep(IDLE_POLL);
                    }
                }
                let _ = reply.send(());
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex as StdMutex};

    /// Engine that records utterances and stays busy for a few polls
    /// after each one.
    struct ScriptedEngine {
        said: Arc<StdMutex<Vec<String>>>,
        polls: Arc<AtomicUsize>,
        busy: Cell<usize>,
    }

    impl Engine for ScriptedEngine {
        fn say(&mut self, text: &str) -> Result<(), String> {
            self.said.lock().unwrap().push(text.to_string());
            self.busy.set(2);
            Ok(())
        }

        fn speaking(&self) -> bool {
            let busy = self.busy.get();
            if busy == 0 {
                return false;
            }
            self.busy.set(busy - 1);
            self.polls.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    fn scripted_voice() -> (VoiceThread, Arc<StdMutex<Vec<String>>>, Arc<AtomicUsize>) {
        let said = Arc::new(StdMutex::new(Vec::new()));
        let polls = Arc::new(AtomicUsize::new(0));
        let (log, counter) = (Arc::clone(&said), Arc::clone(&polls));
        let voice = VoiceThread::spawn(move || {
            Ok(ScriptedEngine {
                said: log,
                polls: counter,
                busy: Cell::new(0),
            })
        });
        (voice, said, polls)
    }

    #[tokio::test]
    async fn test_voice_thread_forwards_text() {
        let (voice, said, _) = scripted_voice();

        voice.speak("Bonjour").await.unwrap();
        voice.speak("Hola").await.unwrap();

        assert_eq!(*said.lock().unwrap(), vec!["Bonjour", "Hola"]);
    }

    #[tokio::test]
    async fn test_voice_finish_waits_until_idle() {
        let (voice, _, polls) = scripted_voice();

        voice.speak("Hola").await.unwrap();
        voice.finish().await;

        assert_eq!(polls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_voice_without_engine_is_speech_failure() {
        let voice = VoiceThread::spawn(|| Err::<ScriptedEngine, _>("no voices".to_string()));

        let err = voice.speak("hello").await.unwrap_err();

        assert!(matches!(err, WidgetError::SpeechFailure(_)));
        assert!(err.to_string().contains("no voices"));
        // Finishing with no engine returns at once.
        voice.finish().await;
    }

    #[tokio::test]
    async fn test_unavailable_backend_is_speech_failure() {
        let speaker = SystemSpeaker {
            backend: Backend::Unavailable,
        };
        let err = speaker.speak("hello").await.unwrap_err();
        assert!(matches!(err, WidgetError::SpeechFailure(_)));
    }

    #[tokio::test]
    async fn test_unknown_program_is_speech_failure() {
        let speaker = SystemSpeaker::new(Some(vec!["tbox-no-such-speech-program".to_string()]));
        let err = speaker.speak("hello").await.unwrap_err();
        assert!(err.to_string().contains("tbox-no-such-speech-program"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_new_utterance_replaces_previous() {
        let speaker = SystemSpeaker::new(Some(vec!["sleep".to_string()]));
        let Backend::Program { current, .. } = &speaker.backend else {
            panic!("expected a program backend");
        };

        speaker.speak("30").await.unwrap();
        let first_pid = current.lock().await.as_ref().unwrap().id();

        speaker.speak("30").await.unwrap();
        let second_pid = current.lock().await.as_ref().unwrap().id();

        assert!(first_pid.is_some());
        assert_ne!(first_pid, second_pid);

        if let Some(mut child) = current.lock().await.take() {
            child.kill().await.unwrap();
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_finish_waits_for_program() {
        let speaker = SystemSpeaker::new(Some(vec!["sleep".to_string()]));
        speaker.speak("0.1").await.unwrap();

        speaker.finish().await;

        let Backend::Program { current, .. } = &speaker.backend else {
            panic!("expected a program backend");
        };
        let status = current.lock().await.as_mut().unwrap().try_wait().unwrap();
        assert!(status.is_some());
    }
}
