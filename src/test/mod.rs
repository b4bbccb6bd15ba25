mod coordinator;
mod load_tracker;
