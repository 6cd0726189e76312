mod endpoints;
