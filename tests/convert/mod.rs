mod tests_convert;
mod tests_properties;
