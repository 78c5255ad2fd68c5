mod tests_ruby_sources;
