pub mod state_bo;
