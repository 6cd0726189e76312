mod test_logout;
