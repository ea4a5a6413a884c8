use super::StatusSignal;

/// Receives signals from the event pump.
pub trait SignalHandler {
    fn handle_signal(&mut self, signal: &StatusSignal);

    fn handle_signals(&mut self, signals: &[StatusSignal]) {
        for signal in signals {
            self.handle_signal(signal);
        }
    }
}
