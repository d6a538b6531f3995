mod top_k_test;
