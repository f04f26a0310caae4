mod secret_filter;
