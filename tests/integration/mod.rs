mod fake_provider;
mod preview_destroy;
mod test_utils;
mod user_context;
