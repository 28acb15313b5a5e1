// Nimbus state managers
// Managers handle stateful bookkeeping owned by the window.

pub mod tab_manager;
