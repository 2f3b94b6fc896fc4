mod test_prune;
